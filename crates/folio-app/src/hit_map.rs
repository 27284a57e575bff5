//! Clickable regions recorded during render
//!
//! The renderer registers every interactive area after laying it out; pointer
//! handling resolves a cell to the topmost target. Popovers are drawn last,
//! so they are registered last and win over what lies beneath.

/// A rectangle in terminal cells. Mirrors `ratatui::layout::Rect` without
/// depending on the terminal crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    SearchInput,
    TagMenuButton,
    YearMenuButton,
    ClearAll,
    /// Option row inside the open tag dropdown
    TagOption(String),
    YearOption(i32),
    /// Remove affordance on a badge
    RemoveTag(String),
    RemoveYear(i32),
    /// The whole carousel viewport (drag surface)
    Carousel,
    /// A visible slide, by index into the filtered list
    Slide(usize),
    PrevSlide,
    NextSlide,
    TagMenuPanel,
    YearMenuPanel,
    ThemeToggle,
    ContactButton,
    ContactMenuPanel,
    ContactLink(usize),
    SocialsButton,
    SocialsMenuPanel,
    SocialLink(usize),
    EmptyStateClearAll,
}

impl HitTarget {
    /// Targets that keep the tag dropdown open when clicked
    pub fn belongs_to_tag_menu(&self) -> bool {
        matches!(
            self,
            HitTarget::TagMenuButton | HitTarget::TagMenuPanel | HitTarget::TagOption(_)
        )
    }

    pub fn belongs_to_year_menu(&self) -> bool {
        matches!(
            self,
            HitTarget::YearMenuButton | HitTarget::YearMenuPanel | HitTarget::YearOption(_)
        )
    }

    pub fn belongs_to_contact_menu(&self) -> bool {
        matches!(
            self,
            HitTarget::ContactButton | HitTarget::ContactMenuPanel | HitTarget::ContactLink(_)
        )
    }

    pub fn belongs_to_socials_menu(&self) -> bool {
        matches!(
            self,
            HitTarget::SocialsButton | HitTarget::SocialsMenuPanel | HitTarget::SocialLink(_)
        )
    }

    /// Targets inside the carousel that start a drag
    pub fn is_carousel_surface(&self) -> bool {
        matches!(self, HitTarget::Carousel | HitTarget::Slide(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Area, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: Area, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(column, row))
            .map(|(_, target)| target)
    }

    /// Every target under the cell, topmost first
    pub fn targets_at(&self, column: u16, row: u16) -> impl Iterator<Item = &HitTarget> {
        self.regions
            .iter()
            .rev()
            .filter(move |(area, _)| area.contains(column, row))
            .map(|(_, target)| target)
    }

    pub fn area_of(&self, target: &HitTarget) -> Option<Area> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
