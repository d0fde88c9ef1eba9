/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod errors;
mod oauth;
pub mod parsers;
pub mod photo;
pub mod properties;
pub mod request;
pub mod search;

pub use api::*;
pub use client::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
pub use request::*;
pub use search::*;
