//! The fixed cluster-management topology diagrams.
//!
//! Three diagrams describe how the kind infrastructure provider relates
//! to the clusters it manages: the local development setup, the provider
//! package layout, and the controller running inside a management
//! cluster. Each is a fixed composition; the only variation is the
//! rendering character set.

use asciigram::{ArrowOptions, AsciigramError, Charset, Diagram};

/// Renders the workload kind cluster box.
fn workload_cluster(charset: Charset) -> Result<String, AsciigramError> {
    Diagram::with_charset(charset)
        .boxed("\n    Kind Cluster \n (workload cluster)\n")
        .draw()
}

/// Renders the management kind cluster box.
fn management_cluster(charset: Charset) -> Result<String, AsciigramError> {
    Diagram::with_charset(charset)
        .boxed("\n    Kind Cluster \n (management cluster)\n")
        .draw()
}

/// Renders the provider package box with its separator line.
fn provider_package(charset: Charset) -> Result<String, AsciigramError> {
    Diagram::with_charset(charset)
        .boxed("Provider package")
        .line()
        .draw()
}

/// Local development topology: the infrastructure provider running on
/// your machine, managing and running against both kind clusters.
pub fn machine(charset: Charset) -> Result<String, AsciigramError> {
    let workload = workload_cluster(charset)?;
    let management = management_cluster(charset)?;

    let inner = Diagram::with_charset(charset)
        .boxed("\n\n\n\ninfrastructure provider\n  (running locally)\n\n\n\n")
        .arrow(
            [
                "<->: Manage (e.g. call kind cli) ",
                "<->:         Run against",
            ],
            ArrowOptions::with_size(5),
        )
        .container(format!("{workload}\n{management}"))
        .draw()?;

    Diagram::with_charset(charset)
        .boxed(format!("Your Machine\n\n{inner}"))
        .draw()
}

/// Provider package topology: where the provider package sits inside the
/// locally-running infrastructure provider.
pub fn provider(charset: Charset) -> Result<String, AsciigramError> {
    let package = provider_package(charset)?;
    let workload = workload_cluster(charset)?;
    let management = management_cluster(charset)?;

    let inner = Diagram::with_charset(charset)
        .boxed(format!(
            "{package}\n\n\n\n  infrastructure provider\n    (running locally)\n\n\n\n"
        ))
        .arrow(
            ["-->:     Manage", "<->:  Run against  "],
            ArrowOptions::with_size(5),
        )
        .container(format!("{workload}\n{management}"))
        .draw()?;

    Diagram::with_charset(charset)
        .boxed(format!("Your Machine\n\n{inner}"))
        .draw()
}

/// Controller topology: the KindCluster controller running inside the
/// management cluster, managing the workload clusters.
pub fn controller(charset: Charset) -> Result<String, AsciigramError> {
    let package = provider_package(charset)?;

    let controller_stack = Diagram::with_charset(charset)
        .boxed(format!("KindCluster Controller\n{package}\n"))
        .line()
        .draw()?;

    let workload = Diagram::with_charset(charset)
        .boxed("\n\n\n\n\n    Workload Kind Cluster(s)   \n\n\n\n\n\n")
        .draw()?;

    let management = Diagram::with_charset(charset)
        .boxed(format!("Management kind cluster\n{controller_stack}"))
        .draw()?;

    Diagram::with_charset(charset)
        .container(management)
        .arrow(["-->:Manage"], ArrowOptions::with_size(5))
        .container(workload)
        .draw()
}
