// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::net::Ipv4Addr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("grpc request failed: {0}")]
    Grpc(#[from] tonic::Status),

    #[error("transport: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("peer not found: {0}")]
    PeerNotFound(Ipv4Addr),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("too large: {0}")]
    TooLarge(String),

    #[error("attribute parse error")]
    Parse(nom::Err<(Vec<u8>, nom::error::ErrorKind)>),
}

impl<'a> From<nom::Err<(&'a [u8], nom::error::ErrorKind)>> for Error {
    fn from(e: nom::Err<(&'a [u8], nom::error::ErrorKind)>) -> Error {
        Error::Parse(e.to_owned())
    }
}
