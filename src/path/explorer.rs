use std::io::Write;

use super::route::Route;
use super::traveler::Traveler;
use crate::mountain::{Mountain, MountainNode};

/// `PathScraper` finds every way down a `Mountain` that a traveler can survive.
///
/// The search is an exhaustive depth-first walk to a fixed number of edges. It
/// shares one `Traveler` and one `Route` across the whole walk and undoes its
/// own changes at every branch point instead of copying state per branch.
/// Completed paths come out left subtree first, then right subtree.
pub struct PathScraper;

impl PathScraper {
    /// Number of edges a completed path must walk.
    ///
    /// This is `height + 1`, less one whenever that exceeds one. For any mountain
    /// with an edge it equals the root height; a lone stop asks for one edge it
    /// cannot provide.
    pub fn required_edges(mountain: &Mountain) -> i32 {
        let edges = mountain.height() + 1;
        if edges > 1 {
            edges - 1
        } else {
            edges
        }
    }

    /// Returns every completed path for a traveler starting with nothing.
    pub fn find_all_paths(mountain: &Mountain) -> Vec<Vec<String>> {
        Self::find_all_paths_with(mountain, Traveler::new())
    }

    /// Returns every completed path for a traveler starting with `traveler`'s inventory.
    pub fn find_all_paths_with(mountain: &Mountain, mut traveler: Traveler) -> Vec<Vec<String>> {
        let mut paths: Vec<Vec<String>> = Vec::new();
        let mut route = Route::new();
        Self::explore(mountain, &mut traveler, &mut route, &mut |labels| {
            paths.push(labels.iter().map(|label| label.to_string()).collect());
        });
        paths
    }

    /// Writes every completed path to `writer`, labels separated by spaces,
    /// one path per line. Nothing is written when no path exists.
    pub fn print_paths_to_writer(
        mountain: &Mountain,
        mut traveler: Traveler,
        writer: &mut dyn Write,
    ) -> std::io::Result<usize> {
        let mut count = 0;
        let mut result = Ok(());
        let mut route = Route::new();
        Self::explore(mountain, &mut traveler, &mut route, &mut |labels| {
            if result.is_ok() {
                result = writeln!(writer, "{}", labels.join(" "));
                count += 1;
            }
        });
        result.map(|_| count)
    }

    /// Runs the search, handing each completed path to `sink` as it is found.
    ///
    /// `traveler` and `route` are borrowed for the duration and come back
    /// exactly as they went in. An empty mountain reports nothing.
    pub fn explore<'m>(
        mountain: &'m Mountain,
        traveler: &mut Traveler,
        route: &mut Route<'m>,
        sink: &mut dyn FnMut(&[&'m str]),
    ) {
        let Some(root) = mountain.get_root() else {
            return;
        };
        let depth = route.depth();
        {
            let mut checkpoint = traveler.checkpoint();
            Self::visit(Some(root), Self::required_edges(mountain), &mut checkpoint, route, sink);
        }
        route.truncate_to(depth);
    }

    /// One step of the walk: enter `node` with `remaining` edges still to go.
    fn visit<'m>(
        node: Option<&'m MountainNode>,
        remaining: i32,
        traveler: &mut Traveler,
        route: &mut Route<'m>,
        sink: &mut dyn FnMut(&[&'m str]),
    ) {
        // Cliff: the route ended above the floor.
        let Some(node) = node else {
            return;
        };
        let stop = node.waypoint();

        if !traveler.consume_food() {
            return;
        }
        traveler.collect(stop.supplies());

        // Out of food with more walking ahead.
        if traveler.food() < 0 && remaining != 0 {
            return;
        }
        if !traveler.clear_obstacles(stop.obstacles()) {
            return;
        }

        let depth = route.depth();
        route.push(node.label());

        if remaining == 0 {
            sink(route.labels());
            route.truncate_to(depth);
            return;
        }

        for child in [node.left(), node.right()] {
            {
                let mut checkpoint = traveler.checkpoint();
                Self::visit(child, remaining - 1, &mut checkpoint, route, sink);
            }
            route.truncate_to(depth + 1);
        }
        route.truncate_to(depth);
    }
}
