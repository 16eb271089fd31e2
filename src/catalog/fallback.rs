use super::model::{Catalog, Category, EventRecord, EventType, Region, Status};

/// Catalog served before the first successful sync, or forever when syncing is disabled.
pub fn fallback_catalog() -> Catalog {
    Catalog::new(vec![
        record(
            1,
            "Ottawa Bluesfest",
            "July 10-20, 2025",
            "Ottawa, ON",
            "$89-$299 (Multi-day passes)",
            "One of Canada's premier music festivals featuring blues, rock, folk, and world music artists on multiple stages.",
            "https://www.ottawabluesfest.ca/",
            (Category::Music, Region::Ottawa, Status::Confirmed, EventType::Festival),
        ),
        record(
            2,
            "Rideau Canal Skating",
            "December 2024 - March 2025",
            "Ottawa, ON",
            "Free",
            "World's largest naturally frozen skating rink. Enjoy skating on the historic Rideau Canal with BeaverTails and hot chocolate.",
            "https://www.canada.ca/en/canadian-heritage/services/rideau-canal-skateway.html",
            (Category::Winter, Region::Ottawa, Status::Confirmed, EventType::Activity),
        ),
        record(
            3,
            "Thousand Islands Day Trip",
            "May - October 2025",
            "Kingston, ON",
            "$35-$85 (Boat tours)",
            "Scenic boat tour through the beautiful Thousand Islands region with castle visits and stunning views.",
            "https://www.1000islandstourism.com/",
            (Category::Summer, Region::Ontario, Status::Confirmed, EventType::DayTrip),
        ),
        record(
            4,
            "Montreal International Jazz Festival",
            "June 26 - July 6, 2025",
            "Montreal, QC",
            "Free outdoor shows, $35-$150 indoor concerts",
            "World's largest jazz festival with over 500 concerts, featuring jazz, blues, world music, and more.",
            "https://www.montrealjazzfest.com/",
            (Category::Music, Region::Montreal, Status::Tentative, EventType::Festival),
        ),
        record(
            5,
            "Old Montreal Walking Tour",
            "Year-round",
            "Montreal, QC",
            "$20-$40",
            "Explore the historic cobblestone streets, architecture, and landmarks of Old Montreal with guided tours.",
            "https://www.mtl.org/en/experience/old-montreal-walking-tour",
            (Category::Cultural, Region::Montreal, Status::Confirmed, EventType::Activity),
        ),
        record(
            6,
            "Blue Mountain Ski Day Trip",
            "December 2024 - April 2025",
            "Blue Mountain, ON",
            "$75-$120 (Lift tickets)",
            "Premier ski destination with slopes for all levels, plus village shopping and dining experiences.",
            "https://www.bluemountain.ca/",
            (Category::Winter, Region::Ontario, Status::Confirmed, EventType::DayTrip),
        ),
        record(
            7,
            "Toronto International Film Festival",
            "September 5-15, 2025",
            "Toronto, ON",
            "$25-$75 per screening",
            "One of the world's most prestigious film festivals showcasing international cinema and premieres.",
            "https://www.tiff.net/",
            (Category::Cultural, Region::Ontario, Status::Confirmed, EventType::Festival),
        ),
        record(
            8,
            "Algonquin Park Canoe Adventure",
            "May - September 2025",
            "Algonquin Park, ON",
            "$45-$95 per person",
            "Guided canoe trips through pristine wilderness with wildlife viewing and camping options.",
            "https://www.algonquinpark.on.ca/",
            (Category::Summer, Region::Ontario, Status::Confirmed, EventType::Activity),
        ),
        record(
            9,
            "Quebec City Winter Carnival",
            "February 7-16, 2025",
            "Quebec City, QC",
            "$15-$45",
            "World's largest winter carnival featuring ice sculptures, parades, and winter activities.",
            "https://www.carnaval.qc.ca/",
            (Category::Winter, Region::Quebec, Status::Confirmed, EventType::Festival),
        ),
        record(
            10,
            "Niagara Falls Wine Country Tour",
            "April - October 2025",
            "Niagara, ON",
            "$65-$150",
            "Full-day wine tasting tour through Niagara's renowned vineyards with lunch included.",
            "https://www.niagarawinecountry.com/",
            (Category::Food, Region::Ontario, Status::Confirmed, EventType::DayTrip),
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    date: &str,
    location: &str,
    entry_fee: &str,
    description: &str,
    website: &str,
    (category, region, status, event_type): (Category, Region, Status, EventType),
) -> EventRecord {
    EventRecord {
        id,
        name: name.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        entry_fee: entry_fee.to_string(),
        description: description.to_string(),
        website: website.to_string(),
        category,
        region,
        status,
        event_type,
    }
}
