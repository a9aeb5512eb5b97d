//! Unit joins
//!
//! Menu items reference their unit by *name*, team members by *id*. Both
//! joins live here so the name-based one can be swapped for an id-based one
//! without touching callers.

use shared::{MenuItem, TeamMember, Unit};

/// Read-only lookup over loaded units
#[derive(Debug, Clone, Copy)]
pub struct UnitIndex<'a> {
    units: &'a [Unit],
}

impl<'a> UnitIndex<'a> {
    pub fn new(units: &'a [Unit]) -> Self {
        Self { units }
    }

    pub fn by_id(&self, id: &str) -> Option<&'a Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&'a Unit> {
        self.units.iter().find(|u| u.display_name() == Some(name))
    }

    /// Unit a menu item belongs to
    pub fn unit_for_menu_item(&self, item: &MenuItem) -> Option<&'a Unit> {
        item.unit_name().and_then(|name| self.by_name(name))
    }

    /// Unit a team member belongs to
    pub fn unit_for_member(&self, member: &TeamMember) -> Option<&'a Unit> {
        member.unit_id.as_deref().and_then(|id| self.by_id(id))
    }

    /// Name shown for a member's unit; the raw `unitId` when it does not resolve
    pub fn unit_name_for_member<'m>(&self, member: &'m TeamMember) -> Option<&'m str>
    where
        'a: 'm,
    {
        self.unit_for_member(member)
            .and_then(Unit::display_name)
            .or(member.unit_id.as_deref())
    }

    /// Distinct non-empty unit names in load order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.units.iter().filter_map(Unit::display_name) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

/// Whether a menu item is offered at the named unit
pub fn menu_item_in_unit(item: &MenuItem, unit_name: &str) -> bool {
    item.unit.as_deref() == Some(unit_name)
}
