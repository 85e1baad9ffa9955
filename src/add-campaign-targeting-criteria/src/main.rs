//! Attaches targeting criteria to an existing campaign: a location, a
//! negative keyword and a proximity target, created in a single mutate.

use adgrid_core::{resource_names, AdGridConfig, AdGridError, AdGridResult};
use adgrid_resources::{
    AddressInfo, CampaignCriterion, KeywordInfo, KeywordMatchType, LocationInfo, ProximityInfo,
    ProximityRadiusUnits,
};
use adgrid_services::{AdGridClient, Operation, Transport};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "add-campaign-targeting-criteria")]
#[command(about = "Adds location, negative keyword and proximity criteria to a campaign")]
#[command(version)]
struct Cli {
    /// The AdGrid customer ID.
    #[arg(short = 'c', long, env = "ADGRID_CUSTOMER_ID")]
    customer_id: String,

    /// The ID of the campaign to target.
    #[arg(short = 'i', long)]
    campaign_id: u64,

    /// Keyword to exclude from the campaign.
    #[arg(short = 'k', long, default_value = "jupiter cruise")]
    keyword_text: String,

    /// Geo target constant ID of the location to target. Defaults to
    /// New York City.
    #[arg(short = 'l', long, default_value_t = 21167)]
    location_id: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "add_campaign_targeting_criteria=info,adgrid_services=info".into()
            }),
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

    if let Err(err) = run(
        &client,
        &cli.customer_id,
        cli.campaign_id,
        &cli.keyword_text,
        cli.location_id,
    )
    .await
    {
        report_error(&err);
        std::process::exit(1);
    }
}

fn location_criterion(campaign: &str, location_id: u64) -> CampaignCriterion {
    CampaignCriterion {
        campaign: Some(campaign.to_string()),
        location: Some(LocationInfo {
            geo_target_constant: resource_names::geo_target_constant(location_id),
        }),
        ..Default::default()
    }
}

fn negative_keyword_criterion(campaign: &str, keyword_text: &str) -> CampaignCriterion {
    CampaignCriterion {
        campaign: Some(campaign.to_string()),
        negative: Some(true),
        keyword: Some(KeywordInfo {
            text: keyword_text.to_string(),
            match_type: KeywordMatchType::Broad,
        }),
        ..Default::default()
    }
}

fn proximity_criterion(campaign: &str) -> CampaignCriterion {
    CampaignCriterion {
        campaign: Some(campaign.to_string()),
        proximity: Some(ProximityInfo {
            address: AddressInfo {
                street_address: Some("38 avenue de l'Opera".to_string()),
                city_name: Some("Paris".to_string()),
                postal_code: Some("75002".to_string()),
                country_code: Some("FR".to_string()),
                province_code: None,
            },
            radius: 10.0,
            radius_units: ProximityRadiusUnits::Miles,
        }),
        ..Default::default()
    }
}

async fn run<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    campaign_id: u64,
    keyword_text: &str,
    location_id: u64,
) -> AdGridResult<()> {
    let campaign = resource_names::campaign(customer_id, campaign_id);
    info!(%campaign, keyword_text, location_id, "adding targeting criteria");

    let operations = vec![
        Operation::create(location_criterion(&campaign, location_id)),
        Operation::create(negative_keyword_criterion(&campaign, keyword_text)),
        Operation::create(proximity_criterion(&campaign)),
    ];

    let response = client
        .campaign_criterion_service()
        .mutate_campaign_criteria(customer_id, operations)
        .await?;

    for result in &response.results {
        println!(
            "Added campaign criterion \"{}\".",
            result.resource_name
        );
    }
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_criterion_references_the_geo_constant() {
        let criterion = location_criterion("customers/1/campaigns/2", 21167);
        assert_eq!(
            criterion.location.unwrap().geo_target_constant,
            "geoTargetConstants/21167"
        );
        assert_eq!(criterion.negative, None);
    }

    #[test]
    fn negative_keyword_is_broad_matched() {
        let criterion = negative_keyword_criterion("customers/1/campaigns/2", "jupiter cruise");
        assert_eq!(criterion.negative, Some(true));
        let keyword = criterion.keyword.unwrap();
        assert_eq!(keyword.text, "jupiter cruise");
        assert_eq!(keyword.match_type, KeywordMatchType::Broad);
    }

    #[test]
    fn proximity_uses_a_ten_mile_radius() {
        let criterion = proximity_criterion("customers/1/campaigns/2");
        let proximity = criterion.proximity.unwrap();
        assert_eq!(proximity.radius, 10.0);
        assert_eq!(proximity.radius_units, ProximityRadiusUnits::Miles);
        assert_eq!(proximity.address.city_name.as_deref(), Some("Paris"));
    }
}
