#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod error;
pub mod navigation;
pub mod navigator;
pub mod route_definition;
pub mod route_table;
pub mod state;

mod helpers;
mod router_cfg;
mod view;

pub use error::*;
pub use navigation::*;
pub use navigator::{Navigator, Subscription};
pub use route_definition::RouteDefinition;
pub use route_table::{RouteMatch, RouteTable, RouteTableBuilder};
pub use router_cfg::{RouteConfig, RouteEntry};
pub use state::*;
pub use view::ViewId;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::navigation::*;
    pub use crate::navigator::{Navigator, Subscription};
    pub use crate::route_definition::RouteDefinition;
    pub use crate::route_table::{RouteMatch, RouteTable, RouteTableBuilder};
    pub use crate::router_cfg::{RouteConfig, RouteEntry};
    pub use crate::state::*;
    pub use crate::view::ViewId;
    pub use waypoint_history::{History, MemoryHistory};
}
