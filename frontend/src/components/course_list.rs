//! Result list for the course catalog search.

use dioxus::prelude::*;

use common::course_record::CourseRecord;

#[component]
pub fn CourseList(courses: ReadSignal<Vec<CourseRecord>>) -> Element {
    rsx! {
        ul {
            id: "x-course-result-list",
            style: "list-style: none; padding-left: 0;",
            if courses.read().is_empty() {
                li {
                    id: "x-course-no-matches",
                    style: "padding: 10px; color: #6B7280;",
                    "No matching courses."
                }
            } else {
                for course in courses.read().iter() {
                    CourseCard { key: "{course.code}", course: course.clone() }
                }
            }
        }
    }
}

#[component]
fn CourseCard(course: ReadSignal<CourseRecord>) -> Element {
    let course = course.read();
    rsx! {
        li {
            style: "padding: 10px; border-bottom: 1px solid #eee;",
            div {
                style: "font-size: 16px;",
                strong { "{course.code}" }
                " - {course.name}"
            }
            div {
                style: "font-size: 13px; color: #6B7280; margin-top: 2px;",
                span { "Thời lượng: {course.duration}" }
                span { style: "margin-left: 12px;", "Tín chỉ: {course.credits}" }
                span { style: "margin-left: 12px;", "Trọng số: {course.weight}" }
            }
        }
    }
}
