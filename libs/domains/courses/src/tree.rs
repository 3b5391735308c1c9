//! Insertion order for the components of a new course.
//!
//! A component whose parent is named by `parent_temp_id` has to be inserted
//! after that parent so the parent's generated id can be threaded into it.

use std::collections::{HashMap, VecDeque};

use crate::error::{CourseError, CourseResult};
use crate::models::ComponentInput;

/// Where a component's parent id comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef {
    Root,
    /// Index into the request's component list
    Pending(usize),
    Stored(uuid::Uuid),
}

/// A component scheduled for insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedComponent {
    /// Index into the request's component list
    pub index: usize,
    pub parent: ParentRef,
}

fn temp_key(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Orders components parents-first, keeping request order among siblings.
///
/// Fails with `Validation` on duplicate temp ids, unknown parent temp ids,
/// a component naming both kinds of parent, and cycles.
pub fn insertion_order(components: &[ComponentInput]) -> CourseResult<Vec<PlannedComponent>> {
    let mut by_temp_id: HashMap<&str, usize> = HashMap::new();
    for (index, component) in components.iter().enumerate() {
        if let Some(temp_id) = temp_key(component.temp_id.as_deref())
            && by_temp_id.insert(temp_id, index).is_some()
        {
            return Err(CourseError::Validation(format!(
                "duplicate temp_id '{temp_id}'"
            )));
        }
    }

    let mut parents = Vec::with_capacity(components.len());
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); components.len()];
    let mut waiting_on = vec![0usize; components.len()];

    for (index, component) in components.iter().enumerate() {
        let parent = match (
            temp_key(component.parent_temp_id.as_deref()),
            component.real_parent_id,
        ) {
            (Some(_), Some(_)) => {
                return Err(CourseError::Validation(format!(
                    "component {index} sets both parent_temp_id and real_parent_id"
                )));
            }
            (Some(parent_temp_id), None) => {
                let Some(&parent) = by_temp_id.get(parent_temp_id) else {
                    return Err(CourseError::Validation(format!(
                        "component {index} references unknown parent_temp_id '{parent_temp_id}'"
                    )));
                };
                children[parent].push(index);
                waiting_on[index] = 1;
                ParentRef::Pending(parent)
            }
            (None, Some(id)) => ParentRef::Stored(id),
            (None, None) => ParentRef::Root,
        };
        parents.push(parent);
    }

    let mut ready: VecDeque<usize> = (0..components.len())
        .filter(|&i| waiting_on[i] == 0)
        .collect();
    let mut order = Vec::with_capacity(components.len());

    while let Some(index) = ready.pop_front() {
        order.push(PlannedComponent {
            index,
            parent: parents[index],
        });
        for &child in &children[index] {
            waiting_on[child] -= 1;
            if waiting_on[child] == 0 {
                ready.push_back(child);
            }
        }
    }

    if order.len() != components.len() {
        return Err(CourseError::Validation(
            "component parents form a cycle".to_string(),
        ));
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn node(temp_id: Option<&str>, parent_temp_id: Option<&str>) -> ComponentInput {
        ComponentInput {
            component_name: temp_id.unwrap_or("x").into(),
            component_summary: "s".into(),
            component_type_id: 1,
            temp_id: temp_id.map(Into::into),
            parent_temp_id: parent_temp_id.map(Into::into),
            ..Default::default()
        }
    }

    fn indices(order: &[PlannedComponent]) -> Vec<usize> {
        order.iter().map(|p| p.index).collect()
    }

    #[test]
    fn test_parents_come_first() {
        let components = vec![
            node(Some("lesson"), Some("unit")),
            node(Some("unit"), Some("module")),
            node(Some("module"), None),
            node(None, None),
        ];
        let order = insertion_order(&components).unwrap();

        assert_eq!(indices(&order), vec![2, 3, 1, 0]);
        assert_eq!(order[0].parent, ParentRef::Root);
        assert_eq!(order[2].parent, ParentRef::Pending(2));
        assert_eq!(order[3].parent, ParentRef::Pending(1));
    }

    #[test]
    fn test_siblings_keep_request_order() {
        let components = vec![
            node(Some("root"), None),
            node(Some("b"), Some("root")),
            node(Some("a"), Some("root")),
        ];
        assert_eq!(indices(&insertion_order(&components).unwrap()), vec![0, 1, 2]);
    }

    #[test]
    fn test_stored_parent() {
        let id = Uuid::new_v4();
        let mut component = node(None, None);
        component.real_parent_id = Some(id);
        let order = insertion_order(&[component]).unwrap();
        assert_eq!(order[0].parent, ParentRef::Stored(id));
    }

    #[test]
    fn test_rejects_both_parent_kinds() {
        let mut child = node(None, Some("root"));
        child.real_parent_id = Some(Uuid::new_v4());
        let err = insertion_order(&[node(Some("root"), None), child]).unwrap_err();
        assert!(matches!(err, CourseError::Validation(_)));
    }

    #[test]
    fn test_rejects_unknown_parent() {
        let err = insertion_order(&[node(Some("a"), Some("ghost"))]).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_rejects_duplicate_temp_ids() {
        let err = insertion_order(&[node(Some("a"), None), node(Some("a"), None)]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_cycles() {
        let two = [node(Some("a"), Some("b")), node(Some("b"), Some("a"))];
        assert!(matches!(insertion_order(&two), Err(CourseError::Validation(_))));

        let own_parent = [node(Some("a"), Some("a"))];
        assert!(matches!(insertion_order(&own_parent), Err(CourseError::Validation(_))));
    }

    #[test]
    fn test_blank_temp_ids_are_ignored() {
        let components = [node(Some(" "), Some("")), node(Some(" "), None)];
        assert_eq!(insertion_order(&components).unwrap().len(), 2);
    }
}
