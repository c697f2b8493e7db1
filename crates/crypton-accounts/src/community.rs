//! Announcements and contact messages

use crate::error::{AccountError, AccountResult};
use crate::store::AccountStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Accepted rating range of a contact message.
pub const STARS: RangeInclusive<u8> = 1..=5;

/// News posted by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
	pub id: u64,
	pub title: String,
	pub message: String,
	pub created_at: DateTime<Utc>,
}

/// Feedback sent by a user, with a 1 to 5 star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
	pub id: u64,
	pub username: String,
	pub name: String,
	pub family: String,
	pub message: String,
	pub stars: u8,
	pub created_at: DateTime<Utc>,
}

impl AccountStore {
	/// Publish an announcement. Staff only.
	pub fn post_announcement(
		&self,
		actor: &str,
		title: &str,
		message: &str,
	) -> AccountResult<Announcement> {
		let mut state = self.state.write();
		Self::require_staff(&state, actor)?;
		let announcement = Announcement {
			id: state.next_id(),
			title: title.to_string(),
			message: message.to_string(),
			created_at: Utc::now(),
		};
		state.announcements.push(announcement.clone());
		drop(state);

		tracing::info!(actor, title, "Announcement posted");
		Ok(announcement)
	}

	/// Every announcement, newest first.
	pub fn announcements(&self) -> Vec<Announcement> {
		self.state.read().announcements.iter().rev().cloned().collect()
	}

	/// Store a message from `username`, copying their name at send time.
	pub fn send_contact_message(
		&self,
		username: &str,
		message: &str,
		stars: u8,
	) -> AccountResult<ContactMessage> {
		if !STARS.contains(&stars) {
			return Err(AccountError::InvalidStars);
		}

		let mut state = self.state.write();
		let user = state.user(username)?;
		let (name, family) = (user.name.clone(), user.family.clone());
		let contact = ContactMessage {
			id: state.next_id(),
			username: username.to_string(),
			name,
			family,
			message: message.to_string(),
			stars,
			created_at: Utc::now(),
		};
		state.messages.push(contact.clone());
		drop(state);

		tracing::debug!(username, stars, "Contact message received");
		Ok(contact)
	}

	/// Messages visible to `viewer`, newest first. Superusers see all.
	pub fn contact_messages(&self, viewer: &str) -> AccountResult<Vec<ContactMessage>> {
		let state = self.state.read();
		let all = state.user(viewer)?.is_superuser;
		Ok(state
			.messages
			.iter()
			.rev()
			.filter(|message| all || message.username == viewer)
			.cloned()
			.collect())
	}
}
