mod chain_finder;
mod graph_builder;
mod pattern_matcher;
mod reachability_filter;

pub use chain_finder::{ChainFinder, MAX_CHAIN_LENGTH};
pub use graph_builder::{GraphBuilder, GraphOptions, MAX_PACKAGES};
pub use pattern_matcher::{PatternMatcher, WILDCARD};
pub use reachability_filter::ReachabilityFilter;
