//! Routing operations over networks in pragmatic format.

#[cfg(test)]
#[path = "../../tests/unit/extensions/route_test.rs"]
mod route_test;

use crate::extensions::config::RoutingContext;
use crate::format::FormatError;
use crate::format::network::read_network;
use agroute_core::construction::synthesize_edges_for;
use agroute_core::models::{Facility, FlowResult, Link, PathResult};
use agroute_core::solver::shortest_path;
use std::io::{BufReader, Read};

fn read_facilities<R: Read>(network: BufReader<R>) -> Result<Vec<Facility>, String> {
    read_network(network).map_err(|errors| format!("network has errors:\n{}", FormatError::format_many(&errors, "\n")))
}

/// Synthesizes candidate links for the network.
pub fn get_links<R: Read>(network: BufReader<R>, ctx: &RoutingContext) -> Result<Vec<Link>, String> {
    let facilities = read_facilities(network)?;
    let links = synthesize_edges_for(&facilities, ctx.ambient_temp, ctx.product);

    (ctx.environment.logger)(format!("synthesized {} links for {} facilities", links.len(), facilities.len()).as_str());

    Ok(links)
}

/// Finds a path between two facilities. Returns `Ok(None)` when there is no path.
pub fn get_path<R: Read>(
    network: BufReader<R>,
    ctx: &RoutingContext,
    source: &str,
    target: &str,
) -> Result<Option<PathResult>, String> {
    let facilities = read_facilities(network)?;

    let unknown = [source, target]
        .into_iter()
        .filter(|id| !facilities.iter().any(|facility| facility.id == *id))
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        return Err(FormatError::new(
            "E1100",
            format!("unknown facility ids: {}", unknown.join(", ")),
            "use ids of facilities defined in the network",
        )
        .to_string());
    }

    let links = synthesize_edges_for(&facilities, ctx.ambient_temp, ctx.product);
    let path = shortest_path(&facilities, &links, source, target, &ctx.weights);

    (ctx.environment.logger)(
        format!("path from '{source}' to '{target}' is {}", if path.is_some() { "found" } else { "not found" })
            .as_str(),
    );

    Ok(path)
}

/// Finds all paths used to visualize network connectivity.
pub fn get_paths<R: Read>(network: BufReader<R>, ctx: &RoutingContext) -> Result<Vec<PathResult>, String> {
    read_facilities(network).map(|facilities| ctx.create_aggregator().find_all_paths(&facilities))
}

/// Aggregates network flow between all producers and retailers.
pub fn get_flow<R: Read>(network: BufReader<R>, ctx: &RoutingContext) -> Result<FlowResult, String> {
    read_facilities(network).map(|facilities| ctx.create_aggregator().network_flow(&facilities))
}
