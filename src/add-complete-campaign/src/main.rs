//! Creates a complete responsive search ad setup: budget, campaign,
//! ad group, the ad itself, keywords and geo targeting. Optionally wires
//! a customizer attribute into one of the ad's descriptions.

use adgrid_core::{AdGridConfig, AdGridError, AdGridResult};
use adgrid_resources::{
    Ad, AdGroup, AdGroupAd, AdGroupAdStatus, AdGroupCriterion, AdGroupCriterionStatus,
    AdGroupStatus, AdGroupType, AdTextAsset, AdvertisingChannelType, BudgetDeliveryMethod,
    Campaign, CampaignBudget, CampaignCriterion, CampaignStatus, CustomerCustomizer,
    CustomizerAttribute, CustomizerAttributeType, CustomizerValue, KeywordInfo, KeywordMatchType,
    LocationInfo, NetworkSettings, ResponsiveSearchAdInfo, ServedAssetFieldType, TargetSpend,
};
use adgrid_services::{
    AdGridClient, LocationNames, Operation, SuggestGeoTargetConstantsRequest, Transport,
};
use clap::Parser;
use tracing::info;
use uuid::Uuid;

const KEYWORD_TEXT_EXACT: &str = "example of exact match";
const KEYWORD_TEXT_PHRASE: &str = "example of phrase match";
const KEYWORD_TEXT_BROAD: &str = "example of broad match";

const GEO_LOCATION_NAMES: [&str; 3] = ["Buenos aires", "San Isidro", "Mar del Plata"];
// ISO 639-1 locale of the location names above.
const LOCALE: &str = "es";
const COUNTRY_CODE: &str = "AR";

#[derive(Parser, Debug)]
#[command(name = "add-complete-campaign")]
#[command(about = "Creates a complete responsive search ad for the given customer")]
#[command(version)]
struct Cli {
    /// The AdGrid customer ID.
    #[arg(short = 'c', long, env = "ADGRID_CUSTOMER_ID")]
    customer_id: String,

    /// Name of the customizer attribute to create and reference from one
    /// of the ad's descriptions. Must be unique within the customer
    /// account, so pass a fresh value on every run.
    #[arg(short = 'n', long)]
    customizer_attribute_name: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "add_complete_campaign=info,adgrid_services=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match AdGridConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };
    let client = AdGridClient::from_config(&config);

    if let Err(err) = run(&client, &cli.customer_id, cli.customizer_attribute_name).await {
        report_error(&err);
        std::process::exit(1);
    }
}

async fn run<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    customizer_attribute_name: Option<String>,
) -> AdGridResult<()> {
    let customizer_attribute = match customizer_attribute_name {
        Some(name) => {
            let resource_name = create_customizer_attribute(client, customer_id, &name).await?;
            link_customizer_attribute_to_customer(client, customer_id, &resource_name).await?;
            Some(resource_name)
        }
        None => None,
    };

    // The budget can be shared by multiple campaigns.
    let budget = create_campaign_budget(client, customer_id).await?;
    let campaign = create_campaign(client, customer_id, &budget).await?;
    let ad_group = create_ad_group(client, customer_id, &campaign).await?;
    create_ad_group_ad(client, customer_id, &ad_group, customizer_attribute.as_deref()).await?;
    add_keywords(client, customer_id, &ad_group).await?;
    add_geo_targeting(client, customer_id, &campaign).await?;

    Ok(())
}

async fn create_customizer_attribute<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    name: &str,
) -> AdGridResult<String> {
    // PRICE lets the ad dynamically substitute the price of the product
    // being advertised.
    let operation = Operation::create(CustomizerAttribute {
        name: Some(name.to_string()),
        attribute_type: Some(CustomizerAttributeType::Price),
        ..CustomizerAttribute::default()
    });

    let response = client
        .customizer_attribute_service()
        .mutate_customizer_attributes(customer_id, vec![operation])
        .await?;
    let resource_name = expect_first(&response.results)?;

    println!("Added a customizer attribute with resource name: '{resource_name}'");
    Ok(resource_name)
}

async fn link_customizer_attribute_to_customer<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    customizer_attribute: &str,
) -> AdGridResult<()> {
    // The platform substitutes this value for the placeholder whenever the
    // ad serves.
    let operation = Operation::create(CustomerCustomizer {
        customizer_attribute: Some(customizer_attribute.to_string()),
        value: Some(CustomizerValue {
            value_type: CustomizerAttributeType::Price,
            string_value: "100USD".to_string(),
        }),
        ..CustomerCustomizer::default()
    });

    let response = client
        .customer_customizer_service()
        .mutate_customer_customizers(customer_id, vec![operation])
        .await?;
    let resource_name = expect_first(&response.results)?;

    println!("Added a customer customizer to the customer with resource name: '{resource_name}'");
    Ok(())
}

async fn create_campaign_budget<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
) -> AdGridResult<String> {
    let operation = Operation::create(CampaignBudget {
        name: Some(format!("Campaign budget {}", Uuid::new_v4())),
        delivery_method: Some(BudgetDeliveryMethod::Standard),
        amount_micros: Some(500_000),
        ..CampaignBudget::default()
    });

    let response = client
        .campaign_budget_service()
        .mutate_campaign_budgets(customer_id, vec![operation])
        .await?;
    let resource_name = expect_first(&response.results)?;
    println!("Created budget {resource_name}.");
    Ok(resource_name)
}

async fn create_campaign<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    campaign_budget: &str,
) -> AdGridResult<String> {
    let operation = Operation::create(Campaign {
        name: Some(format!("Testing RSA via API {}", Uuid::new_v4())),
        advertising_channel_type: Some(AdvertisingChannelType::Search),
        // PAUSED keeps the ads from serving before targeting is in place.
        status: Some(CampaignStatus::Paused),
        // Maximize clicks; the spend ceiling field is deprecated upstream
        // and stays unset.
        target_spend: Some(TargetSpend::default()),
        campaign_budget: Some(campaign_budget.to_string()),
        network_settings: Some(NetworkSettings {
            target_google_search: Some(true),
            target_search_network: Some(true),
            target_partner_search_network: Some(false),
            target_content_network: Some(true),
        }),
        ..Campaign::default()
    });

    let response = client
        .campaign_service()
        .mutate_campaigns(customer_id, vec![operation])
        .await?;
    let resource_name = expect_first(&response.results)?;
    println!("Created campaign {resource_name}.");
    Ok(resource_name)
}

async fn create_ad_group<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    campaign: &str,
) -> AdGridResult<String> {
    let operation = Operation::create(AdGroup {
        name: Some(format!("Testing RSA via API {}", Uuid::new_v4())),
        status: Some(AdGroupStatus::Enabled),
        campaign: Some(campaign.to_string()),
        ad_group_type: Some(AdGroupType::SearchStandard),
        ..AdGroup::default()
    });

    let response = client
        .ad_group_service()
        .mutate_ad_groups(customer_id, vec![operation])
        .await?;
    let resource_name = expect_first(&response.results)?;
    println!("Created ad group {resource_name}.");
    Ok(resource_name)
}

async fn create_ad_group_ad<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    ad_group: &str,
    customizer_attribute: Option<&str>,
) -> AdGridResult<()> {
    // Pinning is optional; unpinned assets are rotated and the best
    // performers serve more often.
    let pinned_headline =
        AdTextAsset::pinned("Headline 1 testing", ServedAssetFieldType::Headline1);

    let description_2 = match customizer_attribute {
        // Placeholder format: {CUSTOMIZER.<attribute resource name>:<default>}.
        Some(attribute) => AdTextAsset::new(format!("Just {{CUSTOMIZER.{attribute}:10USD}}")),
        None => AdTextAsset::new("Desc 2 testing"),
    };

    let operation = Operation::create(AdGroupAd {
        status: Some(AdGroupAdStatus::Enabled),
        ad_group: Some(ad_group.to_string()),
        ad: Some(Ad {
            final_urls: vec!["https://www.example.com/".to_string()],
            responsive_search_ad: Some(ResponsiveSearchAdInfo {
                headlines: vec![
                    pinned_headline,
                    AdTextAsset::new("Headline 2 testing"),
                    AdTextAsset::new("Headline 3 testing"),
                ],
                descriptions: vec![AdTextAsset::new("Desc 1 testing"), description_2],
                // Shown as https://www.example.com/all-inclusive/deals.
                path1: Some("all-inclusive".to_string()),
                path2: Some("deals".to_string()),
            }),
            ..Ad::default()
        }),
        ..AdGroupAd::default()
    });

    let response = client
        .ad_group_ad_service()
        .mutate_ad_group_ads(customer_id, vec![operation])
        .await?;
    for result in &response.results {
        println!(
            "Created responsive search ad with resource name \"{}\".",
            result.resource_name
        );
    }
    Ok(())
}

/// Creates one keyword per match type: EXACT, PHRASE and BROAD.
async fn add_keywords<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    ad_group: &str,
) -> AdGridResult<()> {
    let keyword_op = |text: &str, match_type: KeywordMatchType| {
        Operation::create(AdGroupCriterion {
            ad_group: Some(ad_group.to_string()),
            status: Some(AdGroupCriterionStatus::Enabled),
            keyword: Some(KeywordInfo {
                text: text.to_string(),
                match_type,
            }),
            ..AdGroupCriterion::default()
        })
    };

    let operations = vec![
        keyword_op(KEYWORD_TEXT_EXACT, KeywordMatchType::Exact),
        keyword_op(KEYWORD_TEXT_PHRASE, KeywordMatchType::Phrase),
        keyword_op(KEYWORD_TEXT_BROAD, KeywordMatchType::Broad),
    ];

    let response = client
        .ad_group_criterion_service()
        .mutate_ad_group_criteria(customer_id, operations)
        .await?;
    for result in &response.results {
        println!("Created keyword {}.", result.resource_name);
    }
    Ok(())
}

/// Looks up geo target constants for the configured location names and
/// targets the campaign at every suggestion.
async fn add_geo_targeting<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    campaign: &str,
) -> AdGridResult<()> {
    let request = SuggestGeoTargetConstantsRequest {
        locale: Some(LOCALE.to_string()),
        country_code: Some(COUNTRY_CODE.to_string()),
        location_names: Some(LocationNames {
            names: GEO_LOCATION_NAMES.iter().map(|s| s.to_string()).collect(),
        }),
    };

    let suggestions = client
        .geo_target_constant_service()
        .suggest_geo_target_constants(request)
        .await?;

    let mut operations = Vec::new();
    for suggestion in &suggestions.geo_target_constant_suggestions {
        let constant = suggestion
            .geo_target_constant
            .resource_name
            .clone()
            .unwrap_or_default();
        info!(
            geo_target_constant = %constant,
            locale = suggestion.locale.as_deref().unwrap_or(""),
            reach = suggestion.reach.unwrap_or(0),
            search_term = suggestion.search_term.as_deref().unwrap_or(""),
            "geo target constant suggested"
        );
        operations.push(Operation::create(CampaignCriterion {
            campaign: Some(campaign.to_string()),
            location: Some(LocationInfo {
                geo_target_constant: constant,
            }),
            ..CampaignCriterion::default()
        }));
    }

    let response = client
        .campaign_criterion_service()
        .mutate_campaign_criteria(customer_id, operations)
        .await?;
    for result in &response.results {
        println!("Added campaign criterion \"{}\".", result.resource_name);
    }
    Ok(())
}

fn expect_first(results: &[adgrid_services::MutateResult]) -> AdGridResult<String> {
    results
        .first()
        .map(|r| r.resource_name.clone())
        .ok_or(AdGridError::EmptyMutateResponse)
}

fn report_error(err: &AdGridError) {
    match err {
        AdGridError::Api(failure) => {
            eprintln!(
                "Request with ID \"{}\" failed with status \"{}\" and includes the following errors:",
                failure.request_id.as_deref().unwrap_or("<unknown>"),
                failure.status
            );
            for error in &failure.errors {
                eprintln!("\tError with message \"{}\".", error.message);
                for field in &error.field_path {
                    eprintln!("\t\tOn field: {field}");
                }
            }
        }
        other => eprintln!("{other}"),
    }
}
