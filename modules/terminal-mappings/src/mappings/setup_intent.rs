use super::TransportAdapter;
use crate::contracts::{
    SetupAttemptApi, SetupAttemptCardPresentDetailsApi, SetupAttemptPaymentMethodDetailsApi,
    SetupAttemptStatusApi, SetupIntentApi, SetupIntentStatusApi, SetupIntentUsageApi,
};
use crate::error::MappingError;
use crate::sdk::{
    SetupAttempt, SetupAttemptCardPresentDetails, SetupAttemptPaymentMethodDetails, SetupIntent,
    SetupIntentStatus, SetupIntentUsage,
};

impl TransportAdapter {
    pub fn map_setup_intent(&self, intent: &SetupIntent) -> Result<SetupIntentApi, MappingError> {
        Ok(SetupIntentApi {
            id: intent.id.clone(),
            created: intent.created,
            customer_id: intent.customer.clone(),
            metadata: intent.metadata.clone().unwrap_or_default(),
            usage: self.map_setup_intent_usage(&intent.usage)?,
            status: self.map_setup_intent_status(&intent.status)?,
            latest_attempt: intent
                .latest_attempt
                .as_ref()
                .map(|attempt| self.map_setup_attempt(attempt))
                .transpose()?,
        })
    }

    pub fn map_setup_intent_usage(
        &self,
        usage: &SetupIntentUsage,
    ) -> Result<SetupIntentUsageApi, MappingError> {
        match usage {
            SetupIntentUsage::OnSession => Ok(SetupIntentUsageApi::OnSession),
            SetupIntentUsage::OffSession => Ok(SetupIntentUsageApi::OffSession),
            SetupIntentUsage::Unknown(raw) => {
                self.unknown_case("setup intent usage", raw, SetupIntentUsageApi::Unknown)
            }
        }
    }

    pub fn map_setup_intent_status(
        &self,
        status: &SetupIntentStatus,
    ) -> Result<SetupIntentStatusApi, MappingError> {
        match status {
            SetupIntentStatus::RequiresPaymentMethod => {
                Ok(SetupIntentStatusApi::RequiresPaymentMethod)
            }
            SetupIntentStatus::RequiresConfirmation => {
                Ok(SetupIntentStatusApi::RequiresConfirmation)
            }
            SetupIntentStatus::RequiresAction => Ok(SetupIntentStatusApi::RequiresAction),
            SetupIntentStatus::Processing => Ok(SetupIntentStatusApi::Processing),
            SetupIntentStatus::Canceled => Ok(SetupIntentStatusApi::Cancelled),
            SetupIntentStatus::Succeeded => Ok(SetupIntentStatusApi::Succeeded),
            SetupIntentStatus::Unknown(raw) => {
                self.unknown_case("setup intent status", raw, SetupIntentStatusApi::Unknown)
            }
        }
    }

    pub fn map_setup_attempt(
        &self,
        attempt: &SetupAttempt,
    ) -> Result<SetupAttemptApi, MappingError> {
        Ok(SetupAttemptApi {
            id: attempt.id.clone(),
            application_id: attempt.application.clone(),
            created: attempt.created,
            customer_id: attempt.customer.clone(),
            on_behalf_of: attempt.on_behalf_of.clone(),
            payment_method_id: attempt.payment_method.clone(),
            payment_method_details: attempt
                .payment_method_details
                .as_ref()
                .map(map_setup_attempt_payment_method_details),
            setup_intent_id: attempt.setup_intent.clone(),
            status: self.map_setup_attempt_status(&attempt.status)?,
        })
    }

    /// Map the SDK's raw setup attempt status string; tokens match exactly
    pub fn map_setup_attempt_status(
        &self,
        status: &str,
    ) -> Result<SetupAttemptStatusApi, MappingError> {
        match status {
            "requires_confirmation" => Ok(SetupAttemptStatusApi::RequiresConfirmation),
            "requires_action" => Ok(SetupAttemptStatusApi::RequiresAction),
            "processing" => Ok(SetupAttemptStatusApi::Processing),
            "succeeded" => Ok(SetupAttemptStatusApi::Succeeded),
            "failed" => Ok(SetupAttemptStatusApi::Failed),
            "abandoned" => Ok(SetupAttemptStatusApi::Abandoned),
            other => {
                self.unknown_case("setup attempt status", other, SetupAttemptStatusApi::Unknown)
            }
        }
    }
}

pub fn map_setup_attempt_payment_method_details(
    details: &SetupAttemptPaymentMethodDetails,
) -> SetupAttemptPaymentMethodDetailsApi {
    SetupAttemptPaymentMethodDetailsApi {
        card_present: details
            .card_present
            .as_ref()
            .map(map_setup_attempt_card_present_details),
        interac_present: details
            .interac_present
            .as_ref()
            .map(map_setup_attempt_card_present_details),
    }
}

pub fn map_setup_attempt_card_present_details(
    details: &SetupAttemptCardPresentDetails,
) -> SetupAttemptCardPresentDetailsApi {
    SetupAttemptCardPresentDetailsApi {
        emv_auth_data: details.emv_auth_data.clone(),
        generated_card: details.generated_card.clone(),
    }
}
