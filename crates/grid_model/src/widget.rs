//! Widget payload types
//!
//! A widget's kind decides how a grid item is rendered. The layout engine
//! never looks at it: geometry lives on [`crate::GridItem`] and the payload
//! here travels along untouched.

use serde::{Deserialize, Serialize};

/// Social or video platform a card links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Xiaohongshu,
    Bilibili,
    Youtube,
    Twitter,
    Github,
    Wechat,
    /// Platform-less card
    #[serde(rename = "default")]
    Generic,
}

impl Default for Platform {
    fn default() -> Self {
        Self::Generic
    }
}

/// The tag of a widget, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Text,
    Image,
    App,
    Video,
    Social,
    Profile,
}

impl WidgetType {
    /// The types a user can pick when adding a widget to an empty cell
    pub const ADDABLE: [WidgetType; 5] = [
        WidgetType::Text,
        WidgetType::Image,
        WidgetType::Video,
        WidgetType::Social,
        WidgetType::App,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WidgetType::Text => "Text",
            WidgetType::Image => "Image",
            WidgetType::App => "App",
            WidgetType::Video => "Video",
            WidgetType::Social => "Social",
            WidgetType::Profile => "Profile",
        }
    }
}

/// Content shown by a newly added text widget
pub const DEFAULT_TEXT_CONTENT: &str = "New Text Widget";

/// Picture shown by a newly added image widget
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/400/400/?blur";

/// Widget kind together with the payload relevant to it.
///
/// Serialized flattened into the item as `"type": "<tag>"` plus payload
/// fields, so stored documents keep their plain JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetKind {
    /// Free-form text block
    Text {
        #[serde(default)]
        content: String,
    },
    /// Picture, `content` is the image URL
    Image {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// App icon card, `content` is the app name
    App {
        #[serde(default)]
        content: String,
    },
    /// Embedded video, `content` is the video URL
    Video {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<Platform>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Social profile link, `content` is the account handle
    Social {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<Platform>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    /// Profile header card
    Profile {
        #[serde(default)]
        content: String,
    },
}

impl WidgetKind {
    /// Create a text widget
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create an image widget
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image {
            content: url.into(),
            title: None,
        }
    }

    /// Create an app icon widget
    pub fn app(name: impl Into<String>) -> Self {
        Self::App {
            content: name.into(),
        }
    }

    /// Create a video widget
    pub fn video(url: impl Into<String>, platform: Option<Platform>) -> Self {
        Self::Video {
            content: url.into(),
            platform,
            title: None,
        }
    }

    /// Create a social link widget
    pub fn social(handle: impl Into<String>, platform: Platform) -> Self {
        Self::Social {
            content: handle.into(),
            platform: Some(platform),
            title: None,
            subtitle: None,
        }
    }

    /// The payload a freshly added widget of `widget_type` starts with
    pub fn placeholder(widget_type: WidgetType) -> Self {
        match widget_type {
            WidgetType::Text => Self::text(DEFAULT_TEXT_CONTENT),
            WidgetType::Image => Self::image(DEFAULT_IMAGE_URL),
            WidgetType::App => Self::app(""),
            WidgetType::Video => Self::video("", None),
            WidgetType::Social => Self::Social {
                content: String::new(),
                platform: None,
                title: None,
                subtitle: None,
            },
            WidgetType::Profile => Self::Profile {
                content: String::new(),
            },
        }
    }

    /// Get the widget's tag
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetKind::Text { .. } => WidgetType::Text,
            WidgetKind::Image { .. } => WidgetType::Image,
            WidgetKind::App { .. } => WidgetType::App,
            WidgetKind::Video { .. } => WidgetType::Video,
            WidgetKind::Social { .. } => WidgetType::Social,
            WidgetKind::Profile { .. } => WidgetType::Profile,
        }
    }

    /// Primary content string (text, URL, app name or handle)
    pub fn content(&self) -> &str {
        match self {
            WidgetKind::Text { content }
            | WidgetKind::Image { content, .. }
            | WidgetKind::App { content }
            | WidgetKind::Video { content, .. }
            | WidgetKind::Social { content, .. }
            | WidgetKind::Profile { content } => content,
        }
    }

    /// Replace the primary content string, keeping the rest of the payload
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        let mut widget = self.clone();
        match &mut widget {
            WidgetKind::Text { content: c }
            | WidgetKind::Image { content: c, .. }
            | WidgetKind::App { content: c }
            | WidgetKind::Video { content: c, .. }
            | WidgetKind::Social { content: c, .. }
            | WidgetKind::Profile { content: c } => *c = content.into(),
        }
        widget
    }

    /// Switch to another widget type, carrying the content string over
    pub fn converted_to(&self, widget_type: WidgetType) -> Self {
        if self.widget_type() == widget_type {
            return self.clone();
        }
        Self::placeholder(widget_type).with_content(self.content())
    }

    /// Card title, for the kinds that have one
    pub fn title(&self) -> Option<&str> {
        match self {
            WidgetKind::Image { title, .. }
            | WidgetKind::Video { title, .. }
            | WidgetKind::Social { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// Linked platform, for the kinds that have one
    pub fn platform(&self) -> Option<Platform> {
        match self {
            WidgetKind::Video { platform, .. } | WidgetKind::Social { platform, .. } => *platform,
            _ => None,
        }
    }
}

impl Default for WidgetKind {
    fn default() -> Self {
        Self::placeholder(WidgetType::Text)
    }
}
