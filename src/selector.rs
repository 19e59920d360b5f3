//! View filtering ahead of compliance and visibility checks.

use crate::model::{View, ViewType};

/// 3D views whose name contains `keyword`, ignoring case.
///
/// Input order is kept. An empty keyword selects every 3D view.
#[must_use]
pub fn select_by_keyword<'a, I>(views: I, keyword: &str) -> Vec<&'a View>
where
    I: IntoIterator<Item = &'a View>,
{
    let keyword = keyword.to_lowercase();
    views
        .into_iter()
        .filter(|view| view.view_type.is_3d())
        .filter(|view| view.name.to_lowercase().contains(&keyword))
        .collect()
}

/// Views whose kind is in `type_filter`; `None` keeps every view.
#[must_use]
pub fn select_by_type<'a, I>(views: I, type_filter: Option<&[ViewType]>) -> Vec<&'a View>
where
    I: IntoIterator<Item = &'a View>,
{
    views
        .into_iter()
        .filter(|view| type_filter.is_none_or(|allowed| allowed.contains(&view.view_type)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn views() -> Vec<View> {
        vec![
            View::new(1, "{3D}", ViewType::ThreeD),
            View::new(2, "Navisworks Export", ViewType::ThreeD),
            View::new(3, "L01_ARC_Plan", ViewType::FloorPlan),
            View::new(4, "NAVISWORKS Coordination", ViewType::ThreeD),
            View::new(5, "Navisworks Section", ViewType::Section),
            View::new(6, "A101 - Sheet", ViewType::DrawingSheet),
        ]
    }

    fn ids(views: &[&View]) -> Vec<i64> {
        views.iter().map(|v| v.id.0).collect()
    }

    #[test]
    fn test_keyword_matches_3d_views_case_insensitively() {
        let all = views();
        let selected = select_by_keyword(&all, "navisworks");
        assert_eq!(ids(&selected), vec![2, 4]);
    }

    #[test]
    fn test_keyword_without_match_selects_nothing() {
        let all = views();
        assert!(select_by_keyword(&all, "Clash").is_empty());
    }

    #[test]
    fn test_empty_keyword_selects_all_3d_views() {
        let all = views();
        assert_eq!(ids(&select_by_keyword(&all, "")), vec![1, 2, 4]);
    }

    #[test]
    fn test_type_filter_none_keeps_everything() {
        let all = views();
        assert_eq!(ids(&select_by_type(&all, None)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_type_filter_keeps_listed_kinds_in_order() {
        let all = views();
        let allowed = [ViewType::Section, ViewType::FloorPlan];
        assert_eq!(ids(&select_by_type(&all, Some(&allowed))), vec![3, 5]);
        assert!(select_by_type(&all, Some(&[])).is_empty());
    }

    #[test]
    fn test_selectors_compose() {
        let all = views();
        let typed = select_by_type(&all, Some(&[ViewType::ThreeD, ViewType::Section]));
        let selected = select_by_keyword(typed, "navisworks");
        assert_eq!(ids(&selected), vec![2, 4]);
    }
}
