use super::TransportAdapter;
use crate::amounts::{decimal_to_f64, minor_units_to_f64};
use crate::contracts::{
    AmountDetailsApi, CaptureMethodApi, CardPresentDetailsApi, ChargeApi, ChargeStatusApi,
    ConfirmationMethodApi, PaymentIntentApi, PaymentIntentStatusApi, PaymentMethodApi,
    PaymentMethodTypeApi, PaymentStatusApi, TipApi,
};
use crate::error::MappingError;
use crate::sdk::{
    AmountDetails, CaptureMethod, CardPresentDetails, Charge, ChargeStatus, PaymentIntent,
    PaymentIntentStatus, PaymentMethod, PaymentMethodType, PaymentStatus,
};

impl TransportAdapter {
    /// Map an SDK payment intent to its transport record
    ///
    /// Fields the SDK does not type (amount capturable/received, application
    /// fee, client secret, on-behalf-of, confirmation method) come from the
    /// intent's extended attributes. Fields the plugin schema defines but the
    /// SDK never supplies are left absent.
    ///
    /// # Errors
    ///
    /// * `MissingRequiredField("id")` if the intent has no identifier yet
    /// * `UnsupportedEnumCase` for an unknown status, capture method, charge
    ///   status or payment method type under the reject policy
    pub fn map_payment_intent(
        &self,
        intent: &PaymentIntent,
    ) -> Result<PaymentIntentApi, MappingError> {
        let id = intent
            .id
            .clone()
            .ok_or(MappingError::MissingRequiredField("id"))?;
        let extended = &intent.extended;

        let charges = intent
            .charges
            .iter()
            .map(|charge| self.map_charge(charge))
            .collect::<Result<Vec<_>, _>>()?;

        let payment_method = intent
            .payment_method
            .as_ref()
            .map(|method| self.map_payment_method(method))
            .transpose()?;

        Ok(PaymentIntentApi {
            amount: minor_units_to_f64(intent.amount),
            amount_capturable: extended.amount_capturable,
            amount_details: intent
                .amount_details
                .as_ref()
                .map(|details| self.map_amount_details(details)),
            amount_received: extended.amount_received,
            amount_tip: intent
                .amount_tip
                .and_then(|tip| decimal_to_f64(tip, self.config.amount_scale)),
            application_fee_amount: extended.application_fee_amount,
            application_id: None,
            canceled_at: None,
            cancellation_reason: None,
            capture_method: self.map_capture_method(&intent.capture_method)?,
            charges,
            client_secret: extended.client_secret.clone(),
            confirmation_method: self
                .map_confirmation_method(extended.confirmation_method.as_deref()),
            created: intent.created,
            currency: intent.currency.clone(),
            customer_id: None,
            description: intent.description.clone(),
            id,
            invoice_id: None,
            metadata: intent.metadata.clone().unwrap_or_default(),
            on_behalf_of: extended.on_behalf_of.clone(),
            payment_method,
            payment_method_id: intent.payment_method_id.clone(),
            receipt_email: None,
            review_id: None,
            setup_future_usage: None,
            statement_descriptor: intent.statement_descriptor.clone(),
            statement_descriptor_suffix: intent.statement_descriptor_suffix.clone(),
            status: self.map_payment_intent_status(&intent.status)?,
            transfer_group: None,
        })
    }

    pub fn map_payment_intent_status(
        &self,
        status: &PaymentIntentStatus,
    ) -> Result<PaymentIntentStatusApi, MappingError> {
        match status {
            PaymentIntentStatus::RequiresPaymentMethod => {
                Ok(PaymentIntentStatusApi::RequiresPaymentMethod)
            }
            PaymentIntentStatus::RequiresConfirmation => {
                Ok(PaymentIntentStatusApi::RequiresConfirmation)
            }
            PaymentIntentStatus::RequiresCapture => Ok(PaymentIntentStatusApi::RequiresCapture),
            PaymentIntentStatus::Processing => Ok(PaymentIntentStatusApi::Processing),
            PaymentIntentStatus::Canceled => Ok(PaymentIntentStatusApi::Canceled),
            PaymentIntentStatus::Succeeded => Ok(PaymentIntentStatusApi::Succeeded),
            PaymentIntentStatus::RequiresAction => Ok(PaymentIntentStatusApi::RequiresAction),
            PaymentIntentStatus::Unknown(raw) => {
                self.unknown_case("payment intent status", raw, PaymentIntentStatusApi::Unknown)
            }
        }
    }

    pub fn map_capture_method(
        &self,
        method: &CaptureMethod,
    ) -> Result<CaptureMethodApi, MappingError> {
        match method {
            CaptureMethod::Manual => Ok(CaptureMethodApi::Manual),
            CaptureMethod::Automatic => Ok(CaptureMethodApi::Automatic),
            CaptureMethod::Unknown(raw) => {
                self.unknown_case("capture method", raw, CaptureMethodApi::Unknown)
            }
        }
    }

    /// Map the raw confirmation method string
    ///
    /// Anything other than "automatic" or "manual" (including absent) maps to
    /// absent. With `legacy_confirmation_method` set, "manual" maps to the
    /// automatic case.
    pub fn map_confirmation_method(&self, raw: Option<&str>) -> Option<ConfirmationMethodApi> {
        match raw {
            Some("automatic") => Some(ConfirmationMethodApi::Automatic),
            Some("manual") if self.config.legacy_confirmation_method => {
                Some(ConfirmationMethodApi::Automatic)
            }
            Some("manual") => Some(ConfirmationMethodApi::Manual),
            _ => None,
        }
    }

    pub fn map_amount_details(&self, details: &AmountDetails) -> AmountDetailsApi {
        AmountDetailsApi {
            tip: details.tip.as_ref().map(|tip| TipApi {
                amount: tip
                    .amount
                    .and_then(|amount| decimal_to_f64(amount, self.config.amount_scale)),
            }),
        }
    }

    pub fn map_charge(&self, charge: &Charge) -> Result<ChargeApi, MappingError> {
        Ok(ChargeApi {
            id: charge.id.clone(),
            amount: minor_units_to_f64(charge.amount),
            amount_refunded: minor_units_to_f64(charge.amount_refunded),
            currency: charge.currency.clone(),
            status: self.map_charge_status(&charge.status)?,
            paid: charge.paid,
            captured: charge.captured,
            description: charge.description.clone(),
            metadata: charge.metadata.clone().unwrap_or_default(),
            statement_descriptor_suffix: charge.statement_descriptor_suffix.clone(),
            calculated_statement_descriptor: charge.calculated_statement_descriptor.clone(),
            authorization_code: charge.authorization_code.clone(),
        })
    }

    pub fn map_charge_status(
        &self,
        status: &ChargeStatus,
    ) -> Result<ChargeStatusApi, MappingError> {
        match status {
            ChargeStatus::Succeeded => Ok(ChargeStatusApi::Succeeded),
            ChargeStatus::Pending => Ok(ChargeStatusApi::Pending),
            ChargeStatus::Failed => Ok(ChargeStatusApi::Failed),
            ChargeStatus::Unknown(raw) => {
                self.unknown_case("charge status", raw, ChargeStatusApi::Unknown)
            }
        }
    }

    pub fn map_payment_method(
        &self,
        method: &PaymentMethod,
    ) -> Result<PaymentMethodApi, MappingError> {
        Ok(PaymentMethodApi {
            id: method.id.clone(),
            payment_method_type: self
                .map_payment_method_type_from_host(&method.payment_method_type)?,
            customer_id: method.customer.clone(),
            created: method.created,
            metadata: method.metadata.clone().unwrap_or_default(),
            card_present: method.card_present.as_ref().map(map_card_present_details),
            interac_present: method.interac_present.as_ref().map(map_card_present_details),
        })
    }

    /// Map the SDK's payment method type to the transport tag
    pub fn map_payment_method_type_from_host(
        &self,
        method_type: &PaymentMethodType,
    ) -> Result<PaymentMethodTypeApi, MappingError> {
        match method_type {
            PaymentMethodType::CardPresent => Ok(PaymentMethodTypeApi::CardPresent),
            PaymentMethodType::Card => Ok(PaymentMethodTypeApi::Card),
            PaymentMethodType::InteracPresent => Ok(PaymentMethodTypeApi::InteractPresent),
            PaymentMethodType::Unknown(raw) => {
                self.unknown_case("payment method type", raw, PaymentMethodTypeApi::Unknown)
            }
        }
    }

    /// Map the reader's payment collection status
    pub fn map_payment_status(
        &self,
        status: &PaymentStatus,
    ) -> Result<PaymentStatusApi, MappingError> {
        match status {
            PaymentStatus::NotReady => Ok(PaymentStatusApi::NotReady),
            PaymentStatus::Ready => Ok(PaymentStatusApi::Ready),
            PaymentStatus::WaitingForInput => Ok(PaymentStatusApi::WaitingForInput),
            PaymentStatus::Processing => Ok(PaymentStatusApi::Processing),
            PaymentStatus::Unknown(raw) => {
                self.unknown_case("payment status", raw, PaymentStatusApi::Unknown)
            }
        }
    }
}

fn map_card_present_details(details: &CardPresentDetails) -> CardPresentDetailsApi {
    CardPresentDetailsApi {
        brand: details.brand.clone(),
        country: details.country.clone(),
        exp_month: details.exp_month,
        exp_year: details.exp_year,
        funding: details.funding.clone(),
        last4: details.last4.clone(),
        fingerprint: details.fingerprint.clone(),
        cardholder_name: details.cardholder_name.clone(),
    }
}
