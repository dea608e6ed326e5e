// This file is @generated by tonic-build from proto/gobgp.proto.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNeighborRequest {
    #[prost(bool, tag = "1")]
    pub enable_advertised: bool,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNeighborResponse {
    #[prost(message, repeated, tag = "1")]
    pub peers: ::prost::alloc::vec::Vec<Peer>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddNeighborRequest {
    #[prost(message, optional, tag = "1")]
    pub peer: ::core::option::Option<Peer>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddNeighborResponse {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNeighborRequest {
    #[prost(message, optional, tag = "1")]
    pub peer: ::core::option::Option<Peer>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNeighborResponse {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRibRequest {
    #[prost(message, optional, tag = "1")]
    pub table: ::core::option::Option<Table>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRibResponse {
    #[prost(message, optional, tag = "1")]
    pub table: ::core::option::Option<Table>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Table {
    #[prost(enumeration = "Resource", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub family: u32,
    #[prost(message, repeated, tag = "4")]
    pub destinations: ::prost::alloc::vec::Vec<Destination>,
    #[prost(bool, tag = "5")]
    pub post_policy: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Destination {
    #[prost(string, tag = "1")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub paths: ::prost::alloc::vec::Vec<Path>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Path {
    #[prost(bytes = "vec", tag = "1")]
    pub nlri: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub pattrs: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(int64, tag = "3")]
    pub age: i64,
    #[prost(bool, tag = "4")]
    pub best: bool,
    #[prost(bool, tag = "5")]
    pub is_withdraw: bool,
    #[prost(int32, tag = "6")]
    pub validation: i32,
    #[prost(uint32, tag = "8")]
    pub family: u32,
    #[prost(uint32, tag = "9")]
    pub source_asn: u32,
    #[prost(string, tag = "10")]
    pub source_id: ::prost::alloc::string::String,
    #[prost(bool, tag = "11")]
    pub filtered: bool,
    #[prost(bool, tag = "12")]
    pub stale: bool,
    #[prost(string, tag = "14")]
    pub neighbor_ip: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Peer {
    #[prost(uint32, repeated, tag = "1")]
    pub families: ::prost::alloc::vec::Vec<u32>,
    #[prost(message, optional, tag = "3")]
    pub conf: ::core::option::Option<PeerConf>,
    #[prost(message, optional, tag = "4")]
    pub ebgp_multihop: ::core::option::Option<EbgpMultihop>,
    #[prost(message, optional, tag = "6")]
    pub info: ::core::option::Option<PeerState>,
    #[prost(message, optional, tag = "7")]
    pub timers: ::core::option::Option<Timers>,
    #[prost(message, optional, tag = "8")]
    pub transport: ::core::option::Option<Transport>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerConf {
    #[prost(string, tag = "1")]
    pub auth_password: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub local_as: u32,
    #[prost(string, tag = "4")]
    pub neighbor_address: ::prost::alloc::string::String,
    #[prost(uint32, tag = "5")]
    pub peer_as: u32,
    #[prost(string, tag = "6")]
    pub peer_group: ::prost::alloc::string::String,
    #[prost(uint32, tag = "7")]
    pub peer_type: u32,
    #[prost(string, tag = "13")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "17")]
    pub local_address: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerState {
    #[prost(uint32, tag = "3")]
    pub local_as: u32,
    #[prost(string, tag = "5")]
    pub neighbor_address: ::prost::alloc::string::String,
    #[prost(uint32, tag = "6")]
    pub peer_as: u32,
    #[prost(uint32, tag = "13")]
    pub session_state: u32,
    #[prost(string, tag = "15")]
    pub bgp_state: ::prost::alloc::string::String,
    #[prost(uint32, tag = "16")]
    pub admin_state: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Timers {
    #[prost(message, optional, tag = "1")]
    pub config: ::core::option::Option<TimersConfig>,
    #[prost(message, optional, tag = "2")]
    pub state: ::core::option::Option<TimersState>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimersConfig {
    #[prost(uint64, tag = "1")]
    pub connect_retry: u64,
    #[prost(uint64, tag = "2")]
    pub hold_time: u64,
    #[prost(uint64, tag = "3")]
    pub keepalive_interval: u64,
    #[prost(uint64, tag = "4")]
    pub minimum_advertisement_interval: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimersState {
    #[prost(uint64, tag = "1")]
    pub connect_retry: u64,
    #[prost(uint64, tag = "2")]
    pub hold_time: u64,
    #[prost(uint64, tag = "3")]
    pub keepalive_interval: u64,
    #[prost(uint64, tag = "4")]
    pub minimum_advertisement_interval: u64,
    #[prost(uint64, tag = "5")]
    pub negotiated_hold_time: u64,
    #[prost(uint64, tag = "6")]
    pub uptime: u64,
    #[prost(uint64, tag = "7")]
    pub downtime: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EbgpMultihop {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub multihop_ttl: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transport {
    #[prost(string, tag = "1")]
    pub local_address: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub local_port: u32,
    #[prost(bool, tag = "4")]
    pub passive_mode: bool,
    #[prost(string, tag = "5")]
    pub remote_address: ::prost::alloc::string::String,
    #[prost(uint32, tag = "6")]
    pub remote_port: u32,
}
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration
)]
#[repr(i32)]
pub enum Resource {
    Global = 0,
    Local = 1,
    AdjIn = 2,
    AdjOut = 3,
    Vrf = 4,
}
impl Resource {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Resource::Global => "GLOBAL",
            Resource::Local => "LOCAL",
            Resource::AdjIn => "ADJ_IN",
            Resource::AdjOut => "ADJ_OUT",
            Resource::Vrf => "VRF",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "GLOBAL" => Some(Self::Global),
            "LOCAL" => Some(Self::Local),
            "ADJ_IN" => Some(Self::AdjIn),
            "ADJ_OUT" => Some(Self::AdjOut),
            "VRF" => Some(Self::Vrf),
            _ => None,
        }
    }
}
/// Generated client implementations.
pub mod gobgp_api_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct GobgpApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GobgpApiClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GobgpApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> GobgpApiClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            GobgpApiClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn get_neighbor(
            &mut self,
            request: impl tonic::IntoRequest<super::GetNeighborRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetNeighborResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gobgpapi.GobgpApi/GetNeighbor",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gobgpapi.GobgpApi", "GetNeighbor"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_rib(
            &mut self,
            request: impl tonic::IntoRequest<super::GetRibRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetRibResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gobgpapi.GobgpApi/GetRib",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gobgpapi.GobgpApi", "GetRib"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn add_neighbor(
            &mut self,
            request: impl tonic::IntoRequest<super::AddNeighborRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AddNeighborResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gobgpapi.GobgpApi/AddNeighbor",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gobgpapi.GobgpApi", "AddNeighbor"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_neighbor(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteNeighborRequest>,
        ) -> std::result::Result<
            tonic::Response<super::DeleteNeighborResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gobgpapi.GobgpApi/DeleteNeighbor",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gobgpapi.GobgpApi", "DeleteNeighbor"));
            self.inner.unary(req, path, codec).await
        }
    }
}
