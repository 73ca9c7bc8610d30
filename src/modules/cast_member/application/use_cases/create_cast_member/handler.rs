use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMember, CastMemberGateway};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::DomainResult;

use super::{command::CreateCastMemberCommand, result::CreateCastMemberOutput};

/// Use case handler for creating a new cast member
pub struct CreateCastMemberHandler {
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl CreateCastMemberHandler {
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
impl NotificationUseCase<CreateCastMemberCommand, CreateCastMemberOutput>
    for CreateCastMemberHandler
{
    async fn execute(
        &self,
        command: CreateCastMemberCommand,
    ) -> DomainResult<NotificationResult<CreateCastMemberOutput>> {
        let mut notification = Notification::create();

        let Some(kind) = command.kind else {
            // Keep validator order: name checks first, then the missing kind.
            notification.validate(|| CastMember::validate_name(&command.name))?;
            notification.append(ValidationError::new("'type' should not be null"))?;
            return Ok(Err(notification));
        };

        let mut member = CastMember::new_with(command.name, kind, &mut notification)?;
        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let created = self.cast_member_gateway.create(&member).await?;
        self.event_publisher
            .publish_all(boxed(member.take_events()))
            .await?;

        Ok(Ok(CreateCastMemberOutput::from(&created)))
    }
}
