pub mod chi_squared;
pub mod noncentral;

pub use chi_squared::{
    chi_squared_2_cdf, chi_squared_2_inverse_sf, chi_squared_2_sf, exponential_inverse_sf,
};
pub use noncentral::{
    SeriesEvaluation, noncentral_chi_squared_2_cdf, noncentral_chi_squared_2_sf,
    noncentral_chi_squared_2_sf_series,
};
