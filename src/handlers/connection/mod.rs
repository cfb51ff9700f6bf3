//! Connection registration handlers.
//!
//! Handles the handshake (PASS, CAP, NICK, USER), the welcome burst that
//! completes it, and the commands valid in any state (PING, QUIT).

mod cap;
mod nick;
mod pass;
mod ping;
mod quit;
mod user;
mod welcome;

pub use cap::CapHandler;
pub use nick::NickHandler;
pub use pass::PassHandler;
pub use ping::PingHandler;
pub use quit::QuitHandler;
pub use user::UserHandler;
pub use welcome::try_login;
