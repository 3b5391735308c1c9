use std::sync::Arc;

use domain_courses::conversions::{page_to_proto, parse_conversation, parse_uuid};
use domain_courses::{CourseRepository, CourseService, CreateCourse, UpdateCourse};
use grpc_client::ToTonicResult;
use grpc_client::interceptors::CallerInfo;
use rpc::courses::v1::{
    CreateCourseRequest, CreateCourseResponse, DeleteCourseRequest, DeleteCourseResponse,
    EnrollStudentRequest, EnrollStudentResponse, GetCourseByIdRequest, GetCourseByIdResponse,
    GetCourseByNameRequest, GetCourseByNameResponse, GetCourseEnrollmentsRequest,
    GetCourseEnrollmentsResponse, GetCoursesByInstitutionRequest, GetCoursesByInstitutionResponse,
    GreetingRequest, GreetingResponse, SearchCourseWithAiRequest, SearchCourseWithAiResponse,
    UpdateCourseRequest, UpdateCourseResponse, courses_service_server::CoursesService,
};
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

pub struct CoursesServiceImpl<R>
where
    R: CourseRepository + 'static,
{
    service: Arc<CourseService<R>>,
}

impl<R> CoursesServiceImpl<R>
where
    R: CourseRepository + 'static,
{
    pub fn new(service: CourseService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

fn caller<T>(request: &Request<T>) -> &str {
    request
        .extensions()
        .get::<CallerInfo>()
        .and_then(|c| c.client_id.as_deref())
        .unwrap_or("unknown")
}

#[tonic::async_trait]
impl<R> CoursesService for CoursesServiceImpl<R>
where
    R: CourseRepository + 'static,
{
    async fn greeting(
        &self,
        request: Request<GreetingRequest>,
    ) -> Result<Response<GreetingResponse>, Status> {
        let req = request.into_inner();
        let message = self.service.greeting(&req.name)?;
        Ok(Response::new(GreetingResponse { message }))
    }

    #[instrument(skip_all, fields(client = caller(&request)))]
    async fn create_course(
        &self,
        request: Request<CreateCourseRequest>,
    ) -> Result<Response<CreateCourseResponse>, Status> {
        let input = CreateCourse::try_from(request.into_inner()).to_tonic()?;
        let course = self.service.create_course(input).await?;

        Ok(Response::new(CreateCourseResponse {
            course: Some(course.into()),
        }))
    }

    async fn get_course_by_id(
        &self,
        request: Request<GetCourseByIdRequest>,
    ) -> Result<Response<GetCourseByIdResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid("course_id", &req.course_id).to_tonic()?;

        let course = self.service.get_course_by_id(id).await?;

        Ok(Response::new(GetCourseByIdResponse {
            course: Some(course.into()),
        }))
    }

    async fn get_courses_by_institution(
        &self,
        request: Request<GetCoursesByInstitutionRequest>,
    ) -> Result<Response<GetCoursesByInstitutionResponse>, Status> {
        let req = request.into_inner();
        let institution_id = parse_uuid("institution_id", &req.institution_id).to_tonic()?;

        let page = self
            .service
            .get_courses_by_institution(institution_id, req.cursor.as_deref(), req.limit)
            .await?;
        let (courses, page_info) = page_to_proto(page);

        Ok(Response::new(GetCoursesByInstitutionResponse { courses, page_info }))
    }

    async fn get_course_by_name(
        &self,
        request: Request<GetCourseByNameRequest>,
    ) -> Result<Response<GetCourseByNameResponse>, Status> {
        let req = request.into_inner();
        let institution_id = parse_uuid("institution_id", &req.institution_id).to_tonic()?;

        let page = self
            .service
            .get_course_by_name(
                institution_id,
                &req.course_name,
                req.cursor.as_deref(),
                req.limit,
            )
            .await?;
        let (courses, page_info) = page_to_proto(page);

        Ok(Response::new(GetCourseByNameResponse { courses, page_info }))
    }

    #[instrument(skip_all, fields(client = caller(&request)))]
    async fn update_course(
        &self,
        request: Request<UpdateCourseRequest>,
    ) -> Result<Response<UpdateCourseResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid("course_id", &req.course_id).to_tonic()?;
        let input = UpdateCourse::try_from(&req).to_tonic()?;

        let course = self.service.update_course(id, input).await?;

        Ok(Response::new(UpdateCourseResponse {
            course: Some(course.into()),
        }))
    }

    #[instrument(skip_all, fields(client = caller(&request)))]
    async fn delete_course(
        &self,
        request: Request<DeleteCourseRequest>,
    ) -> Result<Response<DeleteCourseResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid("course_id", &req.course_id).to_tonic()?;

        self.service.delete_course(id).await?;

        info!(course_id = %id, "Deleted course");
        Ok(Response::new(DeleteCourseResponse { deleted: true }))
    }

    async fn enroll_student(
        &self,
        request: Request<EnrollStudentRequest>,
    ) -> Result<Response<EnrollStudentResponse>, Status> {
        let req = request.into_inner();
        let campus_user_id = parse_uuid("campus_user_id", &req.campus_user_id).to_tonic()?;
        let component_id = parse_uuid("component_id", &req.component_id).to_tonic()?;

        let enrollment = self
            .service
            .enroll_student(campus_user_id, component_id)
            .await?;

        Ok(Response::new(EnrollStudentResponse {
            enrollment: Some(enrollment.into()),
        }))
    }

    async fn get_course_enrollments(
        &self,
        request: Request<GetCourseEnrollmentsRequest>,
    ) -> Result<Response<GetCourseEnrollmentsResponse>, Status> {
        let req = request.into_inner();
        let course_id = parse_uuid("course_id", &req.course_id).to_tonic()?;

        let page = self
            .service
            .get_course_enrollments(course_id, req.cursor.as_deref(), req.limit)
            .await?;
        let (enrollments, page_info) = page_to_proto(page);

        Ok(Response::new(GetCourseEnrollmentsResponse {
            enrollments,
            page_info,
        }))
    }

    #[instrument(skip_all, fields(client = caller(&request)))]
    async fn search_course_with_ai(
        &self,
        request: Request<SearchCourseWithAiRequest>,
    ) -> Result<Response<SearchCourseWithAiResponse>, Status> {
        let conversation = parse_conversation(request.into_inner().messages).to_tonic()?;
        let answer = self.service.search_with_ai(&conversation).await?;
        Ok(Response::new(SearchCourseWithAiResponse { answer }))
    }
}
