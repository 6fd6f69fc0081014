// Prototype: duplicate a document while keeping its owner.
//
// Users and documents live in a `Library`. A document refers to its owner by
// id only, so removing the user leaves the document in place with an owner
// that no longer resolves. Removed ids are retired and never handed out
// again, so a stale owner id can not come back to life as a new user.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::SystemTime;

use crate::error::{PlaygroundError, Result};
use crate::harness::{Pattern, Suite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(usize);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    documents: Vec<DocumentId>,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn documents(&self) -> &[DocumentId] {
        &self.documents
    }

    pub fn documents_count(&self) -> usize {
        self.documents.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub message: String,
    pub created_at: SystemTime,
}

impl Comment {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: SystemTime::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    title: String,
    contents: String,
    comments: Vec<Comment>,
    owner: Option<UserId>,
}

impl Document {
    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The owner's id, even if that user has since been removed.
    pub fn owner_id(&self) -> Option<UserId> {
        self.owner
    }
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug, Default)]
pub struct Library {
    users: HashMap<UserId, User>,
    retired: HashSet<UserId>,
    documents: Vec<Document>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user. Fails if the id belongs to a live user or to one
    /// that was removed.
    pub fn add_user(&mut self, id: UserId, name: impl Into<String>) -> Result<UserId> {
        if self.users.contains_key(&id) || self.retired.contains(&id) {
            return Err(PlaygroundError::UserIdTaken(id));
        }
        self.users.insert(
            id,
            User {
                id,
                name: name.into(),
                documents: Vec::new(),
            },
        );
        Ok(id)
    }

    pub fn remove_user(&mut self, id: UserId) -> Option<User> {
        let removed = self.users.remove(&id)?;
        self.retired.insert(id);
        Some(removed)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.0)
    }

    pub fn documents_count(&self, owner: UserId) -> usize {
        self.user(owner).map_or(0, User::documents_count)
    }

    /// Creates a document and registers it with `owner`, if any.
    pub fn create_document(
        &mut self,
        title: impl Into<String>,
        contents: impl Into<String>,
        owner: Option<UserId>,
    ) -> Result<DocumentId> {
        let id = DocumentId(self.documents.len());

        if let Some(owner_id) = owner {
            let user = self
                .users
                .get_mut(&owner_id)
                .ok_or(PlaygroundError::UnknownOwner(owner_id))?;
            user.documents.push(id);
        }

        self.documents.push(Document {
            id,
            title: title.into(),
            contents: contents.into(),
            comments: Vec::new(),
            owner,
        });
        Ok(id)
    }

    pub fn add_comment(&mut self, document: DocumentId, comment: Comment) -> Result<()> {
        self.document_mut(document)?.comments.push(comment);
        Ok(())
    }

    /// Resolves a document's owner; `None` if it has none or it was removed.
    pub fn owner_of(&self, document: DocumentId) -> Option<&User> {
        self.document(document)
            .and_then(|doc| doc.owner)
            .and_then(|owner| self.user(owner))
    }

    /// Copies title and contents under the same owner. Comments are never
    /// copied; the duplicate starts with an empty list.
    ///
    /// If the original owner was removed, the copy is created without one.
    pub fn duplicate(&mut self, document: DocumentId) -> Result<DocumentId> {
        let original = self
            .document(document)
            .ok_or(PlaygroundError::UnknownDocument(document))?;

        let title = format!("Copy of '{}'", original.title);
        let contents = original.contents.clone();
        let owner = original.owner.filter(|id| self.users.contains_key(id));

        let copy = self.create_document(title, contents, owner)?;
        tracing::debug!(%document, %copy, "document duplicated");
        Ok(copy)
    }

    fn document_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
        self.documents
            .get_mut(id.0)
            .ok_or(PlaygroundError::UnknownDocument(id))
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::Prototype);
    let mut library = Library::new();

    let Ok(user) = library.add_user(UserId(10), "Ivan_83") else {
        suite.check("owner registered", false);
        return suite;
    };
    let Ok(document) = library.create_document("Credit", "Hello world!", Some(user)) else {
        suite.check("original document created", false);
        return suite;
    };
    suite.check_eq("owner starts with one document", library.documents_count(user), 1);

    let copied = library
        .add_comment(document, Comment::new("Keep it up!"))
        .and_then(|_| library.duplicate(document));
    let Ok(copy) = copied else {
        suite.check("document duplicated", false);
        return suite;
    };

    let copy_doc = library.document(copy);
    suite.check_eq("copy has no comments", copy_doc.map(|d| d.comments().len()), Some(0));
    suite.check_eq(
        "copy title",
        copy_doc.map(Document::title),
        Some("Copy of 'Credit'"),
    );
    suite.check_eq("owner now has two documents", library.documents_count(user), 2);

    suite
}
