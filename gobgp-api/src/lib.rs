// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol bindings for the GoBGP v1.25 `gobgpapi` gRPC service.
//!
//! Covers only the subset of the API used by this workspace: the
//! `GetNeighbor`, `GetRib`, `AddNeighbor` and `DeleteNeighbor` RPCs and the
//! messages they reference. The schema lives in `proto/gobgp.proto`; the
//! tonic-build output is committed under `src/gobgpapi.rs` so builds do not
//! need protoc.

#[rustfmt::skip]
mod gobgpapi;

pub use gobgpapi::*;
