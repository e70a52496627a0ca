//! Built-in starter layouts

use crate::{GridItem, GridLayoutData, GridRect, Platform, WidgetKind};
use serde::{Deserialize, Serialize};

/// Named built-in layouts a new page can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// 12 x 8 editor starter page
    #[default]
    Starter,
    /// 6 x 8 profile page with social cards
    Profile,
    /// Empty grid of the given default size
    Blank,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Starter, Template::Profile, Template::Blank];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Starter => "starter",
            Template::Profile => "profile",
            Template::Blank => "blank",
        }
    }

    /// Look a template up by its kebab-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Build the template's document. `rows`/`cols` only apply to `Blank`.
    pub fn build(&self, rows: i32, cols: i32) -> GridLayoutData {
        match self {
            Template::Starter => starter_layout(),
            Template::Profile => profile_layout(),
            Template::Blank => GridLayoutData::new(rows, cols),
        }
    }
}

/// The page a new editor session starts with
pub fn starter_layout() -> GridLayoutData {
    GridLayoutData::with_items(
        12,
        8,
        vec![
            GridItem::new(
                "item-1",
                GridRect::new(1, 1, 4, 4),
                WidgetKind::image("https://images.unsplash.com/photo-1682687220742-aba13b6e50ba"),
            ),
            GridItem::new(
                "item-2",
                GridRect::new(5, 1, 4, 2),
                WidgetKind::text("Welcome to Yooka!"),
            ),
            GridItem::new("item-3", GridRect::new(5, 3, 2, 2), WidgetKind::app("Instagram")),
            GridItem::new("item-4", GridRect::new(7, 3, 2, 2), WidgetKind::app("Twitter")),
            GridItem::new(
                "item-5",
                GridRect::new(1, 5, 8, 4),
                WidgetKind::text("Drag me around! This is a flexible grid system."),
            ),
        ],
    )
}

/// Demo profile page with social cards, a photo and a video
pub fn profile_layout() -> GridLayoutData {
    let social = |handle: &str, platform: Platform, title: Option<&str>| WidgetKind::Social {
        content: handle.to_string(),
        platform: Some(platform),
        title: title.map(str::to_string),
        subtitle: title.map(|_| format!("@{handle}")),
    };

    GridLayoutData::with_items(
        6,
        8,
        vec![
            GridItem::new(
                "item-1",
                GridRect::new(1, 1, 2, 2),
                social("meathill", Platform::Xiaohongshu, Some("小红书")),
            ),
            GridItem::new(
                "item-2",
                GridRect::new(3, 1, 2, 2),
                social("meathill", Platform::Bilibili, Some("哔哩哔哩")),
            ),
            GridItem::new(
                "item-3",
                GridRect::new(1, 3, 4, 3),
                WidgetKind::Image {
                    content: "https://images.unsplash.com/photo-1682687220742-aba13b6e50ba?w=800"
                        .to_string(),
                    title: Some("photo".to_string()),
                },
            ),
            GridItem::new("item-4", GridRect::new(5, 1, 2, 2), social("", Platform::Generic, None)),
            GridItem::new("item-5", GridRect::new(7, 1, 2, 2), social("", Platform::Generic, None)),
            GridItem::new(
                "item-6",
                GridRect::new(5, 3, 4, 3),
                WidgetKind::Video {
                    content: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                    platform: Some(Platform::Youtube),
                    title: Some("youtube".to_string()),
                },
            ),
        ],
    )
}
