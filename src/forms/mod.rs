//! Form handling - path parsing, nested tree building and field state
//!
//! Browsers submit forms as flat `name=value` pairs. Field names may carry
//! dot or bracket paths (`skills.timely`, `items[0][name]`), which
//! [`form_data_object`] folds into one nested [`FormNode`] tree.

pub mod node;
pub mod path;
pub mod state;

pub use node::{FormNode, PathError, deep_set, form_data_object, try_deep_set};
pub use path::{MAX_INDEX, PathSpec, is_index, parse_path};
pub use state::{FormSnapshot, FormStore, FormValue};
