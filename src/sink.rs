//! Command channel for feeding the graph from another thread.
//!
//! The acquisition side holds a [`GraphSink`] and sends commands; the UI side
//! drains the matching receiver once per frame with
//! [`LiveGraph::drain`](crate::LiveGraph::drain). All state mutation therefore
//! happens on the thread that also renders and answers hover queries.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::channels::ChannelId;

/// Messages applied to a [`LiveGraph`](crate::LiveGraph) on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphCommand {
    /// Start a new run with the given `(id, name)` channels. Clears history.
    Configure { channels: Vec<(ChannelId, String)> },
    /// One sampling tick. Missing or NaN values are skipped.
    Ingest {
        elapsed_secs: f64,
        values: HashMap<ChannelId, f64>,
    },
    ZoomIn,
    ZoomOut,
    /// Pan position in `[0, 1]`.
    Pan(f64),
    SetVisible { id: ChannelId, visible: bool },
}

/// Cloneable sender half handed to the data-acquisition code.
#[derive(Clone)]
pub struct GraphSink {
    tx: Sender<GraphCommand>,
}

impl GraphSink {
    /// Announce the channels of a new run.
    pub fn configure<S: Into<String>>(
        &self,
        channels: impl IntoIterator<Item = (ChannelId, S)>,
    ) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::Configure {
            channels: channels
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        })
    }

    /// Send one tick of readings taken `elapsed_secs` after run start.
    pub fn ingest(
        &self,
        elapsed_secs: f64,
        values: HashMap<ChannelId, f64>,
    ) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::Ingest {
            elapsed_secs,
            values,
        })
    }

    #[inline]
    pub fn zoom_in(&self) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::ZoomIn)
    }

    #[inline]
    pub fn zoom_out(&self) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::ZoomOut)
    }

    #[inline]
    pub fn pan(&self, fraction: f64) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::Pan(fraction))
    }

    #[inline]
    pub fn set_visible(&self, id: ChannelId, visible: bool) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(GraphCommand::SetVisible { id, visible })
    }

    /// Send an arbitrary command.
    pub fn send(&self, cmd: GraphCommand) -> Result<(), SendError<GraphCommand>> {
        self.tx.send(cmd)
    }
}

/// Create a new channel pair: `(GraphSink, Receiver<GraphCommand>)`.
pub fn graph_channel() -> (GraphSink, Receiver<GraphCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (GraphSink { tx }, rx)
}
