// @generated
// This file is @generated by prost-build.
/// Keyset pagination metadata. Cursors are opaque.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PageInfo {
    #[prost(bool, tag="1")]
    pub has_next_page: bool,
    #[prost(bool, tag="2")]
    pub has_previous_page: bool,
    #[prost(string, optional, tag="3")]
    pub next_cursor: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="4")]
    pub previous_cursor: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Component {
    #[prost(string, tag="1")]
    pub component_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub component_name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub component_summary: ::prost::alloc::string::String,
    #[prost(string, optional, tag="4")]
    pub context_body: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, tag="5")]
    pub component_type_id: i32,
    #[prost(int32, tag="6")]
    pub position: i32,
    #[prost(string, optional, tag="7")]
    pub parent_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag="8")]
    pub course_id: ::prost::alloc::string::String,
    #[prost(string, repeated, tag="9")]
    pub file_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Course {
    #[prost(string, tag="1")]
    pub course_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub course_name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub course_summary: ::prost::alloc::string::String,
    #[prost(string, optional, tag="4")]
    pub course_description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag="5")]
    pub institution_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="6")]
    pub image_id: ::core::option::Option<::prost::alloc::string::String>,
    /// RFC 3339, UTC
    #[prost(string, tag="7")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="8")]
    pub components: ::prost::alloc::vec::Vec<Component>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Enrollment {
    #[prost(string, tag="1")]
    pub course_enrollment_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub component_id: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub campus_user_id: ::prost::alloc::string::String,
    /// RFC 3339, UTC
    #[prost(string, tag="4")]
    pub enrolled_at: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GreetingRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GreetingResponse {
    #[prost(string, tag="1")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComponentInput {
    #[prost(string, tag="1")]
    pub component_name: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub component_summary: ::prost::alloc::string::String,
    #[prost(int32, tag="3")]
    pub component_type_id: i32,
    #[prost(string, optional, tag="4")]
    pub context_body: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, tag="5")]
    pub position: i32,
    /// Client-side identifier, only meaningful within one CreateCourse call
    #[prost(string, optional, tag="6")]
    pub temp_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="7")]
    pub parent_temp_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="8")]
    pub real_parent_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="9")]
    pub file_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCourseRequest {
    #[prost(string, tag="1")]
    pub course_name: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub course_summary: ::prost::alloc::string::String,
    #[prost(string, optional, tag="3")]
    pub course_description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag="4")]
    pub institution_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="5")]
    pub image_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag="6")]
    pub components: ::prost::alloc::vec::Vec<ComponentInput>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCourseResponse {
    #[prost(message, optional, tag="1")]
    pub course: ::core::option::Option<Course>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseByIdRequest {
    #[prost(string, tag="1")]
    pub course_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseByIdResponse {
    #[prost(message, optional, tag="1")]
    pub course: ::core::option::Option<Course>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCoursesByInstitutionRequest {
    #[prost(string, tag="1")]
    pub institution_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub cursor: ::core::option::Option<::prost::alloc::string::String>,
    /// 0 selects the default page size
    #[prost(uint32, tag="3")]
    pub limit: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCoursesByInstitutionResponse {
    #[prost(message, repeated, tag="1")]
    pub courses: ::prost::alloc::vec::Vec<Course>,
    #[prost(message, optional, tag="2")]
    pub page_info: ::core::option::Option<PageInfo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseByNameRequest {
    #[prost(string, tag="1")]
    pub institution_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub course_name: ::prost::alloc::string::String,
    #[prost(string, optional, tag="3")]
    pub cursor: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(uint32, tag="4")]
    pub limit: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseByNameResponse {
    #[prost(message, repeated, tag="1")]
    pub courses: ::prost::alloc::vec::Vec<Course>,
    #[prost(message, optional, tag="2")]
    pub page_info: ::core::option::Option<PageInfo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCourseRequest {
    #[prost(string, tag="1")]
    pub course_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub course_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="3")]
    pub course_summary: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="4")]
    pub course_description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="5")]
    pub image_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCourseResponse {
    #[prost(message, optional, tag="1")]
    pub course: ::core::option::Option<Course>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteCourseRequest {
    #[prost(string, tag="1")]
    pub course_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteCourseResponse {
    #[prost(bool, tag="1")]
    pub deleted: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnrollStudentRequest {
    #[prost(string, tag="1")]
    pub campus_user_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub component_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnrollStudentResponse {
    #[prost(message, optional, tag="1")]
    pub enrollment: ::core::option::Option<Enrollment>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseEnrollmentsRequest {
    #[prost(string, tag="1")]
    pub course_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub cursor: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(uint32, tag="3")]
    pub limit: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCourseEnrollmentsResponse {
    #[prost(message, repeated, tag="1")]
    pub enrollments: ::prost::alloc::vec::Vec<Enrollment>,
    #[prost(message, optional, tag="2")]
    pub page_info: ::core::option::Option<PageInfo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChatMessage {
    /// system | user | assistant
    #[prost(string, tag="1")]
    pub role: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub content: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchCourseWithAiRequest {
    #[prost(message, repeated, tag="1")]
    pub messages: ::prost::alloc::vec::Vec<ChatMessage>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchCourseWithAiResponse {
    #[prost(string, tag="1")]
    pub answer: ::prost::alloc::string::String,
}
include!("courses.v1.tonic.rs");
// @@protoc_insertion_point(module)
