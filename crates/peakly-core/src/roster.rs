use serde::Serialize;

pub const OWNER_ID: &str = "owner";
const FALLBACK_INITIALS: &str = "XX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub display_name: String,
    pub is_owner: bool,
    pub initials: String,
}

/// Trip participants in insertion order. The owner is created with the roster
/// and can never be removed, so there is always exactly one.
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    members: Vec<TeamMember>,
    #[serde(skip)]
    next_id: u64,
}

impl Roster {
    pub fn new(owner_name: &str) -> Self {
        let owner = TeamMember {
            id: OWNER_ID.to_string(),
            display_name: owner_name.trim().to_string(),
            is_owner: true,
            initials: initials_for(owner_name),
        };
        Self {
            members: vec![owner],
            next_id: 1,
        }
    }

    /// Appends a member. Blank names are ignored. Returns the new id.
    pub fn add_member(&mut self, raw_name: &str) -> Option<String> {
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.fresh_id();
        self.members.push(TeamMember {
            id: id.clone(),
            display_name: name.to_string(),
            is_owner: false,
            initials: initials_for(name),
        });
        debug_assert_eq!(self.owner_count(), 1);
        Some(id)
    }

    /// Removes a non-owner member. Unknown ids and the owner are left alone.
    pub fn remove_member(&mut self, id: &str) -> bool {
        let Some(idx) = self
            .members
            .iter()
            .position(|member| member.id == id && !member.is_owner)
        else {
            return false;
        };
        self.members.remove(idx);
        debug_assert_eq!(self.owner_count(), 1);
        true
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn owner(&self) -> &TeamMember {
        // Slot 0 is seeded in `new` and `remove_member` refuses owners.
        &self.members[0]
    }

    pub fn owner_count(&self) -> usize {
        self.members.iter().filter(|member| member.is_owner).count()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("member-{}", self.next_id);
            self.next_id = self.next_id.saturating_add(1);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// First letter of each of the first two whitespace-separated tokens,
/// uppercased. Falls back to "XX" when neither token starts with a letter.
pub fn initials_for(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().find(|ch| ch.is_alphabetic()))
        .filter_map(|ch| ch.to_uppercase().next())
        .collect();
    if initials.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        initials
    }
}
