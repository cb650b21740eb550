use crate::roster::{
    client::UserSource,
    render,
    status::StatusMessage,
    user::{SortKey, User},
    validator::valid_email,
    view::Surface,
};
use tracing::{debug, error, info, instrument};

/// A single session: the source of users, the surface it draws on, the current
/// status and the users currently shown.
///
/// `submit` borrows the page mutably, so one submission settles before the next
/// one starts and the last response always belongs to the last submission.
pub struct Page<S, V> {
    source: S,
    surface: V,
    status: Option<StatusMessage>,
    users: Vec<User>,
    sortable: bool,
}

impl<S: UserSource, V: Surface> Page<S, V> {
    pub fn new(source: S, surface: V) -> Self {
        Self {
            source,
            surface,
            status: None,
            users: Vec::new(),
            sortable: false,
        }
    }

    /// Validate `email`, fetch the users and render them.
    /// Every outcome ends in a status message, nothing here is fatal.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, email: &str) -> &StatusMessage {
        if !valid_email(email) {
            debug!("rejected email input");
            return self.set_status(StatusMessage::invalid_email());
        }

        self.set_status(StatusMessage::loading());

        match self.source.fetch_users().await {
            Ok(users) => {
                info!("loaded {} users", users.len());
                self.users = users;
                render::render(&mut self.surface, &self.users);
                render::install_sort_control(&mut self.surface);
                self.sortable = true;
                self.set_status(StatusMessage::loaded(self.users.len()))
            }
            Err(e) => {
                error!("Error loading users: {e}");
                self.set_status(StatusMessage::load_error())
            }
        }
    }

    /// Re-sort the users on screen. Returns `false` if nothing has been loaded yet.
    pub fn sort(&mut self, key: SortKey) -> bool {
        if !self.sortable {
            return false;
        }

        debug!("sorting {} users by {key}", self.users.len());
        render::resort(&mut self.surface, &mut self.users, key);

        true
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn set_status(&mut self, status: StatusMessage) -> &StatusMessage {
        self.surface.set_status(&status);
        self.status.insert(status)
    }
}
