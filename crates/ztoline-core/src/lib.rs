pub mod animator;
pub mod chain;
pub mod constants;
pub mod error;
pub mod figure;
pub mod node;
pub mod renderer;
pub mod scale;
pub mod state;
pub mod surface;

pub use animator::*;
pub use chain::*;
pub use constants::*;
pub use error::*;
pub use node::*;
pub use renderer::*;
pub use scale::*;
pub use state::*;
pub use surface::*;
