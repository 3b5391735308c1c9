// @generated
/// Generated client implementations.
pub mod courses_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /// Courses, their component trees, enrollments and AI-assisted search.
    #[derive(Debug, Clone)]
    pub struct CoursesServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl CoursesServiceClient<tonic::transport::Channel> {
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
    impl<T> CoursesServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
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
        ) -> CoursesServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            CoursesServiceClient::new(InterceptedService::new(inner, interceptor))
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
        pub async fn greeting(
            &mut self,
            request: impl tonic::IntoRequest<super::GreetingRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GreetingResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/Greeting",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "Greeting"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn create_course(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CreateCourseResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/CreateCourse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "CreateCourse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_course_by_id(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCourseByIdRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseByIdResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/GetCourseById",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "GetCourseById"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_courses_by_institution(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCoursesByInstitutionRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCoursesByInstitutionResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/GetCoursesByInstitution",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "GetCoursesByInstitution"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_course_by_name(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCourseByNameRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseByNameResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/GetCourseByName",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "GetCourseByName"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn update_course(
            &mut self,
            request: impl tonic::IntoRequest<super::UpdateCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::UpdateCourseResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/UpdateCourse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "UpdateCourse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_course(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::DeleteCourseResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/DeleteCourse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "DeleteCourse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn enroll_student(
            &mut self,
            request: impl tonic::IntoRequest<super::EnrollStudentRequest>,
        ) -> std::result::Result<
            tonic::Response<super::EnrollStudentResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/EnrollStudent",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "EnrollStudent"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_course_enrollments(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCourseEnrollmentsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseEnrollmentsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/GetCourseEnrollments",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "GetCourseEnrollments"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn search_course_with_ai(
            &mut self,
            request: impl tonic::IntoRequest<super::SearchCourseWithAiRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SearchCourseWithAiResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/courses.v1.CoursesService/SearchCourseWithAi",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("courses.v1.CoursesService", "SearchCourseWithAi"));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod courses_service_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with CoursesServiceServer.
    #[async_trait]
    pub trait CoursesService: std::marker::Send + std::marker::Sync + 'static {
        async fn greeting(
            &self,
            request: tonic::Request<super::GreetingRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GreetingResponse>,
            tonic::Status,
        >;
        async fn create_course(
            &self,
            request: tonic::Request<super::CreateCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CreateCourseResponse>,
            tonic::Status,
        >;
        async fn get_course_by_id(
            &self,
            request: tonic::Request<super::GetCourseByIdRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseByIdResponse>,
            tonic::Status,
        >;
        async fn get_courses_by_institution(
            &self,
            request: tonic::Request<super::GetCoursesByInstitutionRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCoursesByInstitutionResponse>,
            tonic::Status,
        >;
        async fn get_course_by_name(
            &self,
            request: tonic::Request<super::GetCourseByNameRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseByNameResponse>,
            tonic::Status,
        >;
        async fn update_course(
            &self,
            request: tonic::Request<super::UpdateCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::UpdateCourseResponse>,
            tonic::Status,
        >;
        async fn delete_course(
            &self,
            request: tonic::Request<super::DeleteCourseRequest>,
        ) -> std::result::Result<
            tonic::Response<super::DeleteCourseResponse>,
            tonic::Status,
        >;
        async fn enroll_student(
            &self,
            request: tonic::Request<super::EnrollStudentRequest>,
        ) -> std::result::Result<
            tonic::Response<super::EnrollStudentResponse>,
            tonic::Status,
        >;
        async fn get_course_enrollments(
            &self,
            request: tonic::Request<super::GetCourseEnrollmentsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCourseEnrollmentsResponse>,
            tonic::Status,
        >;
        async fn search_course_with_ai(
            &self,
            request: tonic::Request<super::SearchCourseWithAiRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SearchCourseWithAiResponse>,
            tonic::Status,
        >;
    }
    /// Courses, their component trees, enrollments and AI-assisted search.
    #[derive(Debug)]
    pub struct CoursesServiceServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> CoursesServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for CoursesServiceServer<T>
    where
        T: CoursesService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/courses.v1.CoursesService/Greeting" => {
                    #[allow(non_camel_case_types)]
                    struct GreetingSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::GreetingRequest>
                    for GreetingSvc<T> {
                        type Response = super::GreetingResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GreetingRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::greeting(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GreetingSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/CreateCourse" => {
                    #[allow(non_camel_case_types)]
                    struct CreateCourseSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::CreateCourseRequest>
                    for CreateCourseSvc<T> {
                        type Response = super::CreateCourseResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateCourseRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::create_course(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = CreateCourseSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/GetCourseById" => {
                    #[allow(non_camel_case_types)]
                    struct GetCourseByIdSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::GetCourseByIdRequest>
                    for GetCourseByIdSvc<T> {
                        type Response = super::GetCourseByIdResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetCourseByIdRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::get_course_by_id(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetCourseByIdSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/GetCoursesByInstitution" => {
                    #[allow(non_camel_case_types)]
                    struct GetCoursesByInstitutionSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::GetCoursesByInstitutionRequest>
                    for GetCoursesByInstitutionSvc<T> {
                        type Response = super::GetCoursesByInstitutionResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetCoursesByInstitutionRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::get_courses_by_institution(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetCoursesByInstitutionSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/GetCourseByName" => {
                    #[allow(non_camel_case_types)]
                    struct GetCourseByNameSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::GetCourseByNameRequest>
                    for GetCourseByNameSvc<T> {
                        type Response = super::GetCourseByNameResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetCourseByNameRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::get_course_by_name(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetCourseByNameSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/UpdateCourse" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateCourseSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::UpdateCourseRequest>
                    for UpdateCourseSvc<T> {
                        type Response = super::UpdateCourseResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateCourseRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::update_course(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpdateCourseSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/DeleteCourse" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteCourseSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::DeleteCourseRequest>
                    for DeleteCourseSvc<T> {
                        type Response = super::DeleteCourseResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteCourseRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::delete_course(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeleteCourseSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/EnrollStudent" => {
                    #[allow(non_camel_case_types)]
                    struct EnrollStudentSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::EnrollStudentRequest>
                    for EnrollStudentSvc<T> {
                        type Response = super::EnrollStudentResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::EnrollStudentRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::enroll_student(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = EnrollStudentSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/GetCourseEnrollments" => {
                    #[allow(non_camel_case_types)]
                    struct GetCourseEnrollmentsSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::GetCourseEnrollmentsRequest>
                    for GetCourseEnrollmentsSvc<T> {
                        type Response = super::GetCourseEnrollmentsResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetCourseEnrollmentsRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::get_course_enrollments(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetCourseEnrollmentsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/courses.v1.CoursesService/SearchCourseWithAi" => {
                    #[allow(non_camel_case_types)]
                    struct SearchCourseWithAiSvc<T: CoursesService>(pub Arc<T>);
                    impl<
                        T: CoursesService,
                    > tonic::server::UnaryService<super::SearchCourseWithAiRequest>
                    for SearchCourseWithAiSvc<T> {
                        type Response = super::SearchCourseWithAiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SearchCourseWithAiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CoursesService>::search_course_with_ai(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SearchCourseWithAiSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for CoursesServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "courses.v1.CoursesService";
    impl<T> tonic::server::NamedService for CoursesServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
