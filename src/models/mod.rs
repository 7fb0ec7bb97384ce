//! Request and response payloads.
//!
//! Request fields that may be left out are `Option` and are omitted from the
//! JSON body when `None`. Response structs decode absent and `null` fields
//! alike to `None` (or an empty `Vec`). Wire key names are kept exactly as
//! the service spells them, which mixes camelCase and snake_case.

mod assets;
mod canvas;
mod common;
mod custom_models;
mod datasets;
mod elements;
mod enums;
mod generations;
mod init_images;
mod prompt;
mod user;
mod variations;

pub use assets::*;
pub use canvas::*;
pub use common::*;
pub use custom_models::*;
pub use datasets::*;
pub use elements::*;
pub use enums::*;
pub use generations::*;
pub use init_images::*;
pub use prompt::*;
pub use user::*;
pub use variations::*;
