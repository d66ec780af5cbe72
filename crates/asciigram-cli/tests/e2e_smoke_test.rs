use std::str::FromStr;

use asciigram::{AsciigramError, Charset};
use asciigram_cli::{Args, charset, topology};

#[test]
fn e2e_all_topologies_render() {
    let renderers: [(&str, fn(Charset) -> Result<String, AsciigramError>); 3] = [
        ("machine", topology::machine),
        ("provider", topology::provider),
        ("controller", topology::controller),
    ];

    let mut failed = Vec::new();

    for charset in [Charset::Unicode, Charset::Ascii] {
        for (name, render) in renderers {
            match render(charset) {
                Ok(rendered) => {
                    assert!(
                        !rendered.trim().is_empty(),
                        "{name} rendered an empty diagram"
                    );
                }
                Err(e) => failed.push((name, charset, e)),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nTopologies that failed:");
        for (name, charset, err) in &failed {
            eprintln!("  - {name} ({charset:?}): {err}");
        }
        panic!("{} topology diagram(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_machine_output_is_one_enclosing_box() {
    let rendered = topology::machine(Charset::Unicode).expect("Failed to render");
    let lines: Vec<&str> = rendered.lines().collect();

    // The whole diagram sits inside the "Your Machine" frame
    assert!(lines.first().unwrap().starts_with('┌'));
    assert!(lines.last().unwrap().starts_with('└'));
    assert!(rendered.contains("Your Machine"));
}

#[test]
fn e2e_controller_box_stack_keeps_separators() {
    let rendered = topology::controller(Charset::Unicode).expect("Failed to render");

    // Controller box and provider package box nest inside the management
    // cluster frame, each followed by its separator rule
    assert!(rendered.contains("KindCluster Controller"));
    assert!(rendered.contains("Provider package"));
}

#[test]
fn e2e_charset_resolution_falls_back_to_unicode() {
    let args = Args {
        charset: "not-a-charset".to_string(),
        log_level: "off".to_string(),
    };
    assert_eq!(charset(&args), Charset::Unicode);

    let args = Args {
        charset: "ascii".to_string(),
        log_level: "off".to_string(),
    };
    assert_eq!(charset(&args), Charset::Ascii);

    // Same parsing the library exposes directly
    assert!(Charset::from_str("ascii").is_ok());
}
