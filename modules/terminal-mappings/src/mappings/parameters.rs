//! Transport → SDK mappings
//!
//! Token strings produced here go to the SDK's wire protocol unchanged and
//! must match it byte-for-byte.

use crate::contracts::{
    CaptureMethodApi, PaymentIntentParametersApi, PaymentIntentUsageApi,
    PaymentMethodOptionsParametersApi, PaymentMethodTypeApi, SetupIntentUsageApi,
};
use crate::error::MappingError;
use crate::sdk::{
    CaptureMethod, CardPresentParameters, ParameterError, PaymentIntentParameters,
    PaymentIntentParametersConfig, PaymentMethodOptionsParameters, SetupIntentUsage,
};

/// Build SDK payment intent parameters from the application's request
///
/// # Errors
///
/// * `ParameterValidation` if the amount or application fee is negative, a
///   payment method type tag is not one the schema defines, or the assembled
///   parameters violate an SDK constraint
pub fn map_payment_intent_parameters(
    params: &PaymentIntentParametersApi,
) -> Result<PaymentIntentParameters, MappingError> {
    let amount =
        u64::try_from(params.amount).map_err(|_| ParameterError::NegativeAmount(params.amount))?;

    let application_fee_amount = params
        .application_fee_amount
        .map(|fee| u64::try_from(fee).map_err(|_| ParameterError::NegativeApplicationFee(fee)))
        .transpose()?;

    let payment_method_types = params
        .payment_method_types
        .iter()
        .map(map_payment_method_type)
        .collect::<Result<Vec<_>, _>>()?;

    let config = PaymentIntentParametersConfig {
        payment_method_types,
        capture_method: map_capture_method_api(&params.capture_method),
        metadata: params.metadata.clone(),
        description: params.description.clone(),
        statement_descriptor: params.statement_descriptor.clone(),
        statement_descriptor_suffix: params.statement_descriptor_suffix.clone(),
        receipt_email: params.receipt_email.clone(),
        customer_id: params.customer_id.clone(),
        application_fee_amount,
        transfer_data_destination: params.transfer_data_destination.clone(),
        transfer_group: params.transfer_group.clone(),
        on_behalf_of: params.on_behalf_of.clone(),
        setup_future_usage: params
            .setup_future_usage
            .map(|usage| map_payment_intent_usage(usage).to_string()),
        payment_method_options: params
            .payment_method_options_parameters
            .as_ref()
            .map(map_payment_method_options),
        ..PaymentIntentParametersConfig::new(amount, params.currency.clone())
    };

    PaymentIntentParameters::build(config).map_err(|err| {
        tracing::warn!(error = %err, "Rejected payment intent parameters");
        MappingError::from(err)
    })
}

/// Map a transport payment method type to the SDK token
///
/// Only tags the schema defines are accepted. A raw tag is rejected even
/// when it happens to spell an SDK token.
pub fn map_payment_method_type(
    method_type: &PaymentMethodTypeApi,
) -> Result<String, ParameterError> {
    match method_type {
        PaymentMethodTypeApi::CardPresent => Ok("card_present".to_string()),
        PaymentMethodTypeApi::Card => Ok("card".to_string()),
        PaymentMethodTypeApi::InteractPresent => Ok("interact_present".to_string()),
        PaymentMethodTypeApi::Unknown(raw) => {
            Err(ParameterError::UnsupportedPaymentMethodType(raw.clone()))
        }
    }
}

pub fn map_capture_method_api(method: &CaptureMethodApi) -> CaptureMethod {
    match method {
        CaptureMethodApi::Automatic => CaptureMethod::Automatic,
        CaptureMethodApi::Manual => CaptureMethod::Manual,
        CaptureMethodApi::Unknown(raw) => CaptureMethod::Unknown(raw.clone()),
    }
}

pub fn map_payment_intent_usage(usage: PaymentIntentUsageApi) -> &'static str {
    match usage {
        PaymentIntentUsageApi::OffSession => "off_session",
        PaymentIntentUsageApi::OnSession => "on_session",
    }
}

pub fn map_setup_intent_usage_api(usage: &SetupIntentUsageApi) -> SetupIntentUsage {
    match usage {
        SetupIntentUsageApi::OffSession => SetupIntentUsage::OffSession,
        SetupIntentUsageApi::OnSession => SetupIntentUsage::OnSession,
        SetupIntentUsageApi::Unknown(raw) => SetupIntentUsage::Unknown(raw.clone()),
    }
}

pub fn map_payment_method_options(
    options: &PaymentMethodOptionsParametersApi,
) -> PaymentMethodOptionsParameters {
    let card_present = &options.card_present_parameters;
    PaymentMethodOptionsParameters {
        card_present: CardPresentParameters {
            request_extended_authorization: card_present.request_extended_authorization,
            request_incremental_authorization_support: card_present
                .request_incremental_authorization_support,
        },
    }
}
