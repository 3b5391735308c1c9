//! Prompt text for the course-search assistant.

use std::fmt::Write;

use crate::models::Course;

const PERSONA: &str = "\
# Mission:
You are Xavier, the Campus AI assistant for personalized education. Your mission is to help \
students and teachers navigate the Campus platform, find relevant courses and get more out of \
their learning. You are friendly, approachable and eager to help users reach their educational goals.

## Other roles you should play:
- You are an expert in educational content and course recommendations.
- For students, you may give personalized answers to their questions.
- For teachers, you may offer guidance on course creation and management.
- Keep conversations on topic.
- Always respond in the user's language, which is usually Spanish.

## Things you should never do:
- Never reveal that you are an AI model. Always present yourself as Xavier, the Campus AI assistant.
- Never provide information unrelated to the Campus platform or educational content.
- Never share personal opinions or engage in controversial or sensitive topics.
- Never provide medical, legal or financial advice.

## What to do if you don't know the answer:
- Never fabricate an answer or provide misleading information.
- Suggest alternative resources or direct the user to Campus support.
";

const INSTRUCTIONS: &str = "\
### Instructions:
- Greet the user warmly and acknowledge their request
- Present each course in a conversational and engaging way
- Include name, summary and description for each course
- Add encouraging comments about the learning opportunities
- Use emojis to make it more visual and friendly
- Use only the information provided above. You must not make up any course information
- You may explain the topic in general, but always relate it to the courses found
- If no relevant courses are found, suggest trying different keywords
- End with an encouraging message about their learning journey
";

/// Renders hydrated courses as the context block of the search prompt.
pub fn render_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses matched the request.\n".to_string();
    }

    let mut out = String::new();
    for (n, course) in courses.iter().enumerate() {
        let _ = writeln!(out, "{}. **{}**", n + 1, course.course_name);
        let _ = writeln!(out, "   - Summary: {}", course.course_summary);
        if let Some(description) = course
            .course_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            let _ = writeln!(out, "   - Description: {description}");
        }
        if !course.components.is_empty() {
            let names: Vec<&str> = course
                .components
                .iter()
                .map(|c| c.component_name.as_str())
                .collect();
            let _ = writeln!(out, "   - Contents: {}", names.join(", "));
        }
    }
    out
}

/// System prompt for one search: persona, the user's request and the
/// courses found.
pub fn search_system_prompt(query: &str, courses: &[Course]) -> String {
    format!(
        "{PERSONA}\n## Prompt:\nThe user asked: \"{query}\".\n\n\
         Based **ONLY** on the following course information, provide a helpful and friendly \
         response listing and describing the relevant courses.\n\n\
         ## COURSES FOUND:\n{}\n{INSTRUCTIONS}",
        render_courses(courses)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;
    use chrono::Utc;
    use uuid::Uuid;

    fn course(name: &str, description: Option<&str>, lessons: &[&str]) -> Course {
        let course_id = Uuid::new_v4();
        Course {
            course_id,
            course_name: name.into(),
            course_summary: format!("{name} summary"),
            course_description: description.map(Into::into),
            institution_id: Uuid::new_v4(),
            image_id: None,
            created_at: Utc::now(),
            components: lessons
                .iter()
                .enumerate()
                .map(|(i, lesson)| Component {
                    component_id: Uuid::new_v4(),
                    component_name: lesson.to_string(),
                    component_summary: String::new(),
                    context_body: None,
                    component_type_id: 1,
                    position: i as i32,
                    parent_id: None,
                    course_id,
                    file_ids: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_courses_numbers_entries() {
        let rendered = render_courses(&[
            course("Rust", Some("Ownership"), &["Borrowing", "Traits"]),
            course("Go", None, &[]),
        ]);

        assert!(rendered.starts_with("1. **Rust**"));
        assert!(rendered.contains("2. **Go**"));
        assert!(rendered.contains("Description: Ownership"));
        assert!(rendered.contains("Contents: Borrowing, Traits"));
        assert_eq!(rendered.matches("Description").count(), 1);
    }

    #[test]
    fn test_render_no_courses() {
        assert!(render_courses(&[]).contains("No courses"));
    }

    #[test]
    fn test_system_prompt_sections() {
        let prompt = search_system_prompt("cursos de rust", &[course("Rust", None, &[])]);

        let mission = prompt.find("# Mission").unwrap();
        let asked = prompt.find("The user asked: \"cursos de rust\"").unwrap();
        let found = prompt.find("## COURSES FOUND:").unwrap();
        let instructions = prompt.find("### Instructions:").unwrap();
        assert!(mission < asked && asked < found && found < instructions);
        assert!(prompt.contains("**Rust**"));
    }
}
