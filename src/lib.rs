//! # literal-shelf
//!
//! Build-time data for a reading page backed by [Literal](https://literal.club).
//!
//! The fetcher logs in to the Literal GraphQL API, pulls the account's reading
//! states and reshapes them into a [`Shelf`]: three ordered lists of
//! [`DisplayBook`] ready for a static-site template. Any failure degrades to an
//! empty shelf so a site build never breaks on the network.
//!
//! ```no_run
//! use literal_shelf::{Credentials, LiteralClient, UreqTransport, fetch_shelf};
//!
//! let credentials = Credentials::new("reader@example.com", "hunter2");
//! let client = LiteralClient::new(UreqTransport::new(literal_shelf::LITERAL_API, None));
//! let shelf = fetch_shelf(Some(&credentials), &client, false);
//! println!("{}", serde_json::to_string_pretty(&shelf).unwrap());
//! ```
//!
//! The rendered page switches between the three lists with a small tab
//! controller, modelled by [`tabs::TabGroup`] and bound to the DOM under the
//! `wasm` feature.
//!
//! The default `cli` feature pulls in the blocking HTTP client and the
//! command-line stack, which do not target the browser. Build the page module
//! without them:
//!
//! ```text
//! cargo build --lib --target wasm32-unknown-unknown --no-default-features --features wasm
//! ```

pub mod debug;
pub mod literal;
pub mod shelf;
pub mod tabs;

pub use literal::{
    Credentials, FetchError, LITERAL_API, LiteralClient, ReadingState, ReadingStatus, Session,
    Transport,
};
#[cfg(feature = "http")]
pub use literal::UreqTransport;
pub use shelf::{DisplayBook, Shelf, fetch_shelf, try_fetch_shelf};
