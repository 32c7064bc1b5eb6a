use tracing::info;

use crate::db::Repository;
use crate::error::NoticeError;
use crate::models::notice::{Notice, MAX_MESSAGE_CHARS};
use crate::notifier::{NoticeAction, NoticeSync};

pub async fn get_notice(repo: &dyn Repository, id: i64) -> Result<Notice, NoticeError> {
    repo.find_notice(id).await?.ok_or(NoticeError::NotFound(id))
}

/// Replaces the message text verbatim.
pub async fn update_notice(
    repo: &dyn Repository,
    sync: &NoticeSync,
    id: i64,
    message: &str,
) -> Result<Notice, NoticeError> {
    if message.trim().is_empty() {
        return Err(NoticeError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(NoticeError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }

    let notice = repo
        .update_notice_message(id, message)
        .await?
        .ok_or(NoticeError::NotFound(id))?;

    info!("NOTAM {} for {} updated", notice.id, notice.airport_code);
    sync.dispatch(NoticeAction::Updated, &notice);
    Ok(notice)
}

pub async fn delete_notice(
    repo: &dyn Repository,
    sync: &NoticeSync,
    id: i64,
) -> Result<Notice, NoticeError> {
    let notice = repo
        .delete_notice(id)
        .await?
        .ok_or(NoticeError::NotFound(id))?;

    info!("NOTAM {} for {} deleted", notice.id, notice.airport_code);
    sync.dispatch(NoticeAction::Deleted, &notice);
    Ok(notice)
}
