pub mod aggregate;
pub mod breakdown;
pub mod categories;
pub mod coaching;
pub mod critical;
pub mod hole;
pub mod round;

pub use aggregate::*;
pub use breakdown::*;
pub use categories::*;
pub use coaching::*;
pub use critical::*;
pub use hole::*;
pub use round::*;
