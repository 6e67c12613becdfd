pub use crate::{
    api::*,
    clap::*,
    daily::*,
    refresh::*,
};

pub use clap::Parser;
pub use log::{info, warn, error, debug, trace};
pub use serde::{Serialize, Deserialize};
pub use chrono::{DateTime, Days, Local, LocalResult, SecondsFormat, TimeZone, Utc};
pub use std::{
    convert::Infallible, net::SocketAddr, sync::Arc, time::Duration,
};
pub use tokio::{sync::RwLock, time::sleep};
pub use word_list::*;
