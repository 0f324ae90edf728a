// Everything that talks to the local League client: credential discovery,
// the authenticated REST surface, the wamp event socket, and the event
// dispatcher that fans frames out to handlers.

pub mod dispatcher;
pub mod lockfile;
pub mod rest;
pub mod socket;

pub use dispatcher::EventDispatcher;
pub use lockfile::LcuCredentials;
pub use rest::LcuRestClient;
pub use socket::{LcuEvent, LcuSocket};
