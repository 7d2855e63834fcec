//! rinex2-obs lib test modules
