use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMember, CastMemberGateway, CastMemberId};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UpdateCastMemberCommand, result::UpdateCastMemberOutput};

/// Use case handler for updating an existing cast member
pub struct UpdateCastMemberHandler {
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl UpdateCastMemberHandler {
    pub fn new(
        cast_member_gateway: Arc<dyn CastMemberGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            cast_member_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl NotificationUseCase<UpdateCastMemberCommand, UpdateCastMemberOutput>
    for UpdateCastMemberHandler
{
    async fn execute(
        &self,
        command: UpdateCastMemberCommand,
    ) -> DomainResult<NotificationResult<UpdateCastMemberOutput>> {
        let id = CastMemberId::from(command.id.as_str());
        let mut member = self
            .cast_member_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CastMember::AGGREGATE_NAME, command.id))?;

        let mut notification = Notification::create();

        let Some(kind) = command.kind else {
            notification.validate(|| CastMember::validate_name(&command.name))?;
            notification.append(ValidationError::new("'type' should not be null"))?;
            return Ok(Err(notification));
        };

        member.update(command.name, kind, &mut notification)?;
        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let updated = self.cast_member_gateway.update(&member).await?;
        self.event_publisher
            .publish_all(boxed(member.take_events()))
            .await?;

        Ok(Ok(UpdateCastMemberOutput::from(&updated)))
    }
}
