pub mod fallback;
pub mod query;
pub mod results;
mod session;

pub use fallback::{fallback_recipes, PLACEHOLDER_IMAGE_URL};
pub use query::{build, build_for_names, QueryMode, QuerySpec};
pub use results::process;
pub use session::RecipeSession;
