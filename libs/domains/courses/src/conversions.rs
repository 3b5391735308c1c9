//! Course-specific proto ↔ domain conversions
//!
//! Responses are built from domain types with `From`; requests are parsed
//! with `TryFrom<_, Error = String>` so the gRPC layer can turn a bad field
//! into `INVALID_ARGUMENT` through `ToTonicResult`.

use ai_providers::{ChatMessage, ChatRole};
use rpc::courses::v1 as proto;

use crate::models::{Component, ComponentInput, Course, CreateCourse, Enrollment, UpdateCourse};
use crate::pagination::{Page, PageInfo};

pub use grpc_client::conversions::*;

// ============================================================================
// Domain → Proto
// ============================================================================

impl From<Component> for proto::Component {
    fn from(component: Component) -> Self {
        proto::Component {
            component_id: uuid_to_string(component.component_id),
            component_name: component.component_name,
            component_summary: component.component_summary,
            context_body: component.context_body,
            component_type_id: component.component_type_id,
            position: component.position,
            parent_id: opt_uuid_to_string(component.parent_id),
            course_id: uuid_to_string(component.course_id),
            file_ids: component.file_ids.into_iter().map(uuid_to_string).collect(),
        }
    }
}

impl From<Course> for proto::Course {
    fn from(course: Course) -> Self {
        proto::Course {
            course_id: uuid_to_string(course.course_id),
            course_name: course.course_name,
            course_summary: course.course_summary,
            course_description: course.course_description,
            institution_id: uuid_to_string(course.institution_id),
            image_id: opt_uuid_to_string(course.image_id),
            created_at: datetime_to_rfc3339(course.created_at),
            components: course.components.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Enrollment> for proto::Enrollment {
    fn from(enrollment: Enrollment) -> Self {
        proto::Enrollment {
            course_enrollment_id: uuid_to_string(enrollment.course_enrollment_id),
            component_id: uuid_to_string(enrollment.component_id),
            campus_user_id: uuid_to_string(enrollment.campus_user_id),
            enrolled_at: datetime_to_rfc3339(enrollment.enrolled_at),
        }
    }
}

impl From<PageInfo> for proto::PageInfo {
    fn from(info: PageInfo) -> Self {
        proto::PageInfo {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            next_cursor: info.next_cursor,
            previous_cursor: info.previous_cursor,
        }
    }
}

/// Splits a page into proto items and proto page info.
pub fn page_to_proto<T, P>(page: Page<T>) -> (Vec<P>, Option<proto::PageInfo>)
where
    P: From<T>,
{
    let items = page.items.into_iter().map(Into::into).collect();
    (items, Some(page.page_info.into()))
}

// ============================================================================
// Proto → Domain
// ============================================================================

impl TryFrom<proto::ComponentInput> for ComponentInput {
    type Error = String;

    fn try_from(input: proto::ComponentInput) -> Result<Self, Self::Error> {
        Ok(ComponentInput {
            real_parent_id: parse_opt_uuid("real_parent_id", input.real_parent_id.as_deref())?,
            file_ids: parse_uuids("file_ids", &input.file_ids)?,
            component_name: input.component_name,
            component_summary: input.component_summary,
            component_type_id: input.component_type_id,
            context_body: input.context_body,
            position: input.position,
            temp_id: input.temp_id,
            parent_temp_id: input.parent_temp_id,
        })
    }
}

impl TryFrom<proto::CreateCourseRequest> for CreateCourse {
    type Error = String;

    fn try_from(request: proto::CreateCourseRequest) -> Result<Self, Self::Error> {
        Ok(CreateCourse {
            institution_id: parse_uuid("institution_id", &request.institution_id)?,
            image_id: parse_opt_uuid("image_id", request.image_id.as_deref())?,
            components: request
                .components
                .into_iter()
                .map(ComponentInput::try_from)
                .collect::<Result<_, _>>()?,
            course_name: request.course_name,
            course_summary: request.course_summary,
            course_description: request.course_description,
        })
    }
}

impl TryFrom<&proto::UpdateCourseRequest> for UpdateCourse {
    type Error = String;

    fn try_from(request: &proto::UpdateCourseRequest) -> Result<Self, Self::Error> {
        Ok(UpdateCourse {
            course_name: request.course_name.clone(),
            course_summary: request.course_summary.clone(),
            course_description: request.course_description.clone(),
            image_id: parse_opt_uuid("image_id", request.image_id.as_deref())?,
        })
    }
}

fn parse_chat_message(message: proto::ChatMessage) -> Result<ChatMessage, String> {
    let role: ChatRole = message.role.parse().map_err(|e| format!("messages: {e}"))?;
    Ok(ChatMessage::new(role, message.content))
}

pub fn parse_conversation(messages: Vec<proto::ChatMessage>) -> Result<Vec<ChatMessage>, String> {
    messages.into_iter().map(parse_chat_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn proto_component(name: &str) -> proto::ComponentInput {
        proto::ComponentInput {
            component_name: name.into(),
            component_summary: "summary".into(),
            component_type_id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_course_to_proto() {
        let course_id = Uuid::new_v4();
        let file_id = Uuid::new_v4();
        let course = Course {
            course_id,
            course_name: "Rust".into(),
            course_summary: "Systems".into(),
            course_description: None,
            institution_id: Uuid::new_v4(),
            image_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            components: vec![Component {
                component_id: Uuid::new_v4(),
                component_name: "Intro".into(),
                component_summary: "Start".into(),
                context_body: None,
                component_type_id: 1,
                position: 0,
                parent_id: None,
                course_id,
                file_ids: vec![file_id],
            }],
        };

        let proto: proto::Course = course.into();

        assert_eq!(proto.course_id, course_id.to_string());
        assert_eq!(proto.created_at, "2024-01-15T10:00:00Z");
        assert_eq!(proto.image_id, None);
        assert_eq!(proto.components[0].file_ids, vec![file_id.to_string()]);
        assert_eq!(proto.components[0].parent_id, None);
    }

    #[test]
    fn test_create_request_to_domain() {
        let institution_id = Uuid::new_v4();
        let parent = Uuid::new_v4();
        let mut child = proto_component("Lesson");
        child.real_parent_id = Some(parent.to_string());
        child.temp_id = Some("l1".into());

        let request = proto::CreateCourseRequest {
            course_name: "Rust".into(),
            course_summary: "Systems".into(),
            institution_id: institution_id.to_string(),
            image_id: Some(String::new()),
            components: vec![proto_component("Module"), child],
            ..Default::default()
        };

        let input = CreateCourse::try_from(request).unwrap();
        assert_eq!(input.institution_id, institution_id);
        assert_eq!(input.image_id, None);
        assert_eq!(input.components[1].real_parent_id, Some(parent));
        assert_eq!(input.components[1].temp_id.as_deref(), Some("l1"));
    }

    #[test]
    fn test_create_request_rejects_bad_ids() {
        let request = proto::CreateCourseRequest {
            institution_id: "not-a-uuid".into(),
            ..Default::default()
        };
        let err = CreateCourse::try_from(request).unwrap_err();
        assert!(err.starts_with("institution_id"));

        let mut component = proto_component("Lesson");
        component.file_ids = vec!["bad".into()];
        let request = proto::CreateCourseRequest {
            institution_id: Uuid::new_v4().to_string(),
            components: vec![component],
            ..Default::default()
        };
        assert!(CreateCourse::try_from(request).unwrap_err().starts_with("file_ids"));
    }

    #[test]
    fn test_parse_conversation() {
        let messages = vec![
            proto::ChatMessage { role: "user".into(), content: "hola".into() },
            proto::ChatMessage { role: "ASSISTANT".into(), content: "¿sí?".into() },
        ];
        let conversation = parse_conversation(messages).unwrap();
        assert_eq!(conversation[1].role, ChatRole::Assistant);

        let bad = vec![proto::ChatMessage { role: "tool".into(), content: "x".into() }];
        assert!(parse_conversation(bad).is_err());
    }

    #[test]
    fn test_page_to_proto() {
        let page = Page {
            items: Vec::<Enrollment>::new(),
            page_info: PageInfo::default(),
        };
        let (items, info): (Vec<proto::Enrollment>, _) = page_to_proto(page);
        assert!(items.is_empty());
        assert_eq!(info.map(|i| i.has_next_page), Some(false));
    }
}
