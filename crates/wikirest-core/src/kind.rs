//! Resource kinds and their URI templates

use crate::error::RouteError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Base path for workspace-scoped resources
pub const WORKSPACES_PREFIX: &str = "/data/workspaces";

/// Base path for global user resources
pub const USERS_PREFIX: &str = "/data/users";

/// Every addressable resource on the wiki service
///
/// Singular kinds address one resource and return its body; plural kinds
/// address a collection and return a newline-delimited list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Page,
    Pages,
    PageTag,
    PageTags,
    PageAttachment,
    PageAttachments,
    Workspace,
    Workspaces,
    WorkspaceTag,
    WorkspaceTags,
    WorkspaceAttachment,
    WorkspaceAttachments,
    WorkspaceUser,
    WorkspaceUsers,
    User,
    Users,
}

impl ResourceKind {
    /// All kinds, in route-table order
    pub const ALL: [ResourceKind; 16] = [
        ResourceKind::Page,
        ResourceKind::Pages,
        ResourceKind::PageTag,
        ResourceKind::PageTags,
        ResourceKind::PageAttachment,
        ResourceKind::PageAttachments,
        ResourceKind::Workspace,
        ResourceKind::Workspaces,
        ResourceKind::WorkspaceTag,
        ResourceKind::WorkspaceTags,
        ResourceKind::WorkspaceAttachment,
        ResourceKind::WorkspaceAttachments,
        ResourceKind::WorkspaceUser,
        ResourceKind::WorkspaceUsers,
        ResourceKind::User,
        ResourceKind::Users,
    ];

    /// The URI template for this kind
    ///
    /// Placeholders are `:name` segments filled in by
    /// [`resolve`](crate::resolve). Templates are fixed at compile time;
    /// there is no mutation path.
    pub fn template(&self) -> &'static str {
        match self {
            ResourceKind::Page => "/data/workspaces/:ws/pages/:pname",
            ResourceKind::Pages => "/data/workspaces/:ws/pages",
            ResourceKind::PageTag => "/data/workspaces/:ws/pages/:pname/tags/:tag",
            ResourceKind::PageTags => "/data/workspaces/:ws/pages/:pname/tags",
            ResourceKind::PageAttachment => {
                "/data/workspaces/:ws/pages/:pname/attachments/:attachment_id"
            }
            ResourceKind::PageAttachments => "/data/workspaces/:ws/pages/:pname/attachments",
            ResourceKind::Workspace => "/data/workspaces/:ws",
            ResourceKind::Workspaces => "/data/workspaces",
            ResourceKind::WorkspaceTag => "/data/workspaces/:ws/tags/:tag",
            ResourceKind::WorkspaceTags => "/data/workspaces/:ws/tags",
            ResourceKind::WorkspaceAttachment => "/data/workspaces/:ws/attachments/:attachment_id",
            ResourceKind::WorkspaceAttachments => "/data/workspaces/:ws/attachments",
            ResourceKind::WorkspaceUser => "/data/workspaces/:ws/users/:user_id",
            ResourceKind::WorkspaceUsers => "/data/workspaces/:ws/users",
            ResourceKind::User => "/data/users/:user_id",
            ResourceKind::Users => "/data/users",
        }
    }

    /// The lowercase tag identifying this kind on the wire and in caller
    /// code that addresses kinds dynamically
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Page => "page",
            ResourceKind::Pages => "pages",
            ResourceKind::PageTag => "pagetag",
            ResourceKind::PageTags => "pagetags",
            ResourceKind::PageAttachment => "pageattachment",
            ResourceKind::PageAttachments => "pageattachments",
            ResourceKind::Workspace => "workspace",
            ResourceKind::Workspaces => "workspaces",
            ResourceKind::WorkspaceTag => "workspacetag",
            ResourceKind::WorkspaceTags => "workspacetags",
            ResourceKind::WorkspaceAttachment => "workspaceattachment",
            ResourceKind::WorkspaceAttachments => "workspaceattachments",
            ResourceKind::WorkspaceUser => "workspaceuser",
            ResourceKind::WorkspaceUsers => "workspaceusers",
            ResourceKind::User => "user",
            ResourceKind::Users => "users",
        }
    }

    /// Whether this kind addresses a collection (newline-delimited list
    /// responses, list query modifiers apply)
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ResourceKind::Pages
                | ResourceKind::PageTags
                | ResourceKind::PageAttachments
                | ResourceKind::Workspaces
                | ResourceKind::WorkspaceTags
                | ResourceKind::WorkspaceAttachments
                | ResourceKind::WorkspaceUsers
                | ResourceKind::Users
        )
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RouteError::UnknownResourceKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_for_every_kind() {
        for kind in ResourceKind::ALL {
            let parsed: ResourceKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_is_a_typed_error() {
        let err = "pagecomments".parse::<ResourceKind>().unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownResourceKind("pagecomments".to_string())
        );
    }

    #[test]
    fn workspace_scoped_templates_share_the_prefix() {
        for kind in ResourceKind::ALL {
            let template = kind.template();
            assert!(
                template.starts_with(WORKSPACES_PREFIX) || template.starts_with(USERS_PREFIX),
                "unexpected prefix in {template}"
            );
        }
    }

    #[test]
    fn plural_kinds_are_lists() {
        assert!(ResourceKind::Pages.is_list());
        assert!(ResourceKind::WorkspaceUsers.is_list());
        assert!(!ResourceKind::Page.is_list());
        assert!(!ResourceKind::WorkspaceAttachment.is_list());
    }
}
