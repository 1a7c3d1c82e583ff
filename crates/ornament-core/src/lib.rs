pub mod config;
pub mod constants;
pub mod foliage;
pub mod gallery;
pub mod motion;
pub mod ornaments;
pub mod photo;
pub mod scene;
pub mod spatial;
pub mod star;
pub mod state;
pub mod swarm;

pub use config::*;
pub use constants::*;
pub use foliage::*;
pub use gallery::*;
pub use ornaments::*;
pub use photo::*;
pub use scene::*;
pub use spatial::*;
pub use star::*;
pub use state::*;
pub use swarm::*;
