// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod case;
pub mod client;
pub mod clock;
pub mod draft;
pub mod filter;
pub mod ids;
pub mod manager;
pub mod model;
pub mod office;
pub mod state;
pub mod store;
pub mod view;

pub use case::*;
pub use client::*;
pub use clock::*;
pub use draft::*;
pub use filter::*;
pub use ids::*;
pub use manager::*;
pub use model::*;
pub use office::*;
pub use state::*;
pub use store::*;
pub use view::*;
