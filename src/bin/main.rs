#[macro_use]
extern crate boruvka;

use log::info;

use boruvka::Boruvka;

/// Finds the minimum spanning tree of a small example graph and logs every round.
///
/// Set `RUST_LOG=debug` or `RUST_LOG=trace` to see the algorithm at work.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let graph = graph![9;
        (0, 1, 4), (0, 6, 7), (1, 6, 11), (1, 7, 20), (1, 2, 9),
        (2, 3, 6), (2, 4, 2), (3, 4, 10), (3, 5, 5), (4, 5, 15),
        (4, 7, 1), (4, 8, 5), (5, 8, 12), (6, 7, 1), (7, 8, 3),
    ]?;

    info!("finding minimum spanning tree of\n{}", graph);

    let tree = Boruvka::new()
        .with_observer(|round| {
            info!(
                "round {}: {} edges with weight {}, {} components left",
                round.number,
                round.edges.len(),
                round.weight,
                round.components,
            )
        })
        .find_mst(&graph)?;

    info!("found minimum spanning tree\n{}", tree);

    Ok(())
}
