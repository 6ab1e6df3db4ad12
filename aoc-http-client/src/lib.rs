//! AOC HTTP Client Library
//!
//! Talks to adventofcode.com on behalf of the launcher: it checks that a
//! session cookie is still logged in and downloads personal puzzle inputs.
//! Requests are blocking, use rustls, and never follow redirects (a logged
//! out session is answered with a redirect to the home page).
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! if let Some(user_id) = client.verify_session(session)?.user_id {
//!     println!("Logged in as #{}", user_id);
//!     let input = client.get_input(2023, 5, session)?;
//!     println!("{} bytes", input.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SessionInfo};
pub use error::AocError;
