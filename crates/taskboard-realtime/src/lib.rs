pub mod channel;
pub mod client;
pub mod hub;
pub mod local;
pub mod server;
pub mod transport;
pub mod wire;

pub use channel::{ChannelState, TaskCommentChannel};
pub use client::WsSocket;
pub use hub::{CommentHub, PeerId, PeerSink};
pub use local::LocalSocket;
pub use server::{build_router, serve};
pub use transport::{CommentListener, CommentTransport, ListenerId, ListenerRegistry};
pub use wire::{ClientEvent, ServerEvent};
