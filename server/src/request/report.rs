use serde::Deserialize;

use application::transfer::GetFinancialSummaryDto;

use crate::controller::Intake;

/// Month filter of the financial summary. The filter only applies when
/// both parts parse; anything else means the all-time summary.
#[derive(Debug, Deserialize)]
pub struct GetFinancialSummaryRequest {
    year: Option<String>,
    month: Option<String>,
}

pub struct ReportTransformer;

impl Intake<GetFinancialSummaryRequest> for ReportTransformer {
    type To = GetFinancialSummaryDto;
    fn emit(&self, input: GetFinancialSummaryRequest) -> Self::To {
        GetFinancialSummaryDto {
            year: input.year.and_then(|year| year.parse().ok()),
            month: input.month.and_then(|month| month.parse().ok()),
        }
    }
}
