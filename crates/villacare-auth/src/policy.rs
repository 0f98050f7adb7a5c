//! Report access policy.
//!
//! Pure decision functions shared by the service layer. Residents only
//! ever see their own reports; staff see and edit everything. Callers
//! that fail a visibility check are answered with not-found rather than
//! forbidden so that report identifiers leak nothing about other users.

use uuid::Uuid;

use villacare_entity::report::model::VillaReport;
use villacare_entity::user::UserRole;

/// The authenticated principal a policy decision is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The acting user's id.
    pub id: Uuid,
    /// The acting user's role.
    pub role: UserRole,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(id: Uuid, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Whether the actor holds the staff role.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// Whether the actor may see this report at all.
///
/// Staff see every report; residents only their own. A `false` here
/// must surface as not-found, never forbidden.
pub fn can_view_report(actor: &Actor, report: &VillaReport) -> bool {
    actor.is_staff() || report.owner_id == actor.id
}

/// Whether the actor may edit report fields (status, priority, notes,
/// schedule). Staff only, regardless of ownership.
pub fn can_edit_report(actor: &Actor) -> bool {
    actor.is_staff()
}

/// Whether the actor may list reports across all owners.
pub fn can_list_all_reports(actor: &Actor) -> bool {
    actor.is_staff()
}

/// Whether the actor may comment on this report.
///
/// Commenting requires the same visibility as viewing: the owner and
/// any staff member may post, nobody else.
pub fn can_comment(actor: &Actor, report: &VillaReport) -> bool {
    can_view_report(actor, report)
}

/// The origin flag recorded on a new comment.
///
/// Derived from the author's role at posting time, never supplied by
/// the client.
pub fn comment_origin(actor: &Actor) -> bool {
    actor.is_staff()
}

/// Whether the actor may read the staff-only notes on a report.
pub fn can_view_staff_notes(actor: &Actor) -> bool {
    actor.is_staff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use villacare_entity::report::category::ReportCategory;
    use villacare_entity::report::priority::ReportPriority;
    use villacare_entity::report::status::ReportStatus;

    fn report_owned_by(owner_id: Uuid) -> VillaReport {
        let now = Utc::now();
        VillaReport {
            id: Uuid::new_v4(),
            owner_id,
            category: ReportCategory::Maintenance,
            priority: ReportPriority::Medium,
            status: ReportStatus::Pending,
            title: "Flickering lights".to_string(),
            description: "Hallway lights flicker at night".to_string(),
            location: "Upstairs hallway".to_string(),
            staff_notes: None,
            created_at: now,
            updated_at: now,
            scheduled_at: None,
            completed_at: None,
        }
    }

    fn resident() -> Actor {
        Actor::new(Uuid::new_v4(), UserRole::Resident)
    }

    fn staff() -> Actor {
        Actor::new(Uuid::new_v4(), UserRole::Staff)
    }

    #[test]
    fn test_owner_can_view_own_report() {
        let owner = resident();
        let report = report_owned_by(owner.id);
        assert!(can_view_report(&owner, &report));
    }

    #[test]
    fn test_other_resident_cannot_view_report() {
        let owner = resident();
        let stranger = resident();
        let report = report_owned_by(owner.id);
        assert!(!can_view_report(&stranger, &report));
    }

    #[test]
    fn test_staff_can_view_any_report() {
        let report = report_owned_by(Uuid::new_v4());
        assert!(can_view_report(&staff(), &report));
    }

    #[test]
    fn test_only_staff_can_edit() {
        let owner = resident();
        assert!(!can_edit_report(&owner));
        assert!(can_edit_report(&staff()));
    }

    #[test]
    fn test_owner_cannot_edit_own_report() {
        // Ownership grants visibility, never edit rights.
        let owner = resident();
        let report = report_owned_by(owner.id);
        assert!(can_view_report(&owner, &report));
        assert!(!can_edit_report(&owner));
    }

    #[test]
    fn test_only_staff_list_all() {
        assert!(!can_list_all_reports(&resident()));
        assert!(can_list_all_reports(&staff()));
    }

    #[test]
    fn test_comment_rights_mirror_visibility() {
        let owner = resident();
        let stranger = resident();
        let report = report_owned_by(owner.id);

        assert!(can_comment(&owner, &report));
        assert!(can_comment(&staff(), &report));
        assert!(!can_comment(&stranger, &report));
    }

    #[test]
    fn test_comment_origin_derived_from_role() {
        assert!(!comment_origin(&resident()));
        assert!(comment_origin(&staff()));
    }

    #[test]
    fn test_staff_notes_hidden_from_residents() {
        let owner = resident();
        let report = report_owned_by(owner.id);
        assert!(can_view_report(&owner, &report));
        assert!(!can_view_staff_notes(&owner));
        assert!(can_view_staff_notes(&staff()));
    }
}
