/// Header line classification, from its label (columns 60-79).
/// Labels are case and spacing sensitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Label {
    VersionType,
    Comment,
    MarkerName,
    MarkerNumber,
    ObserverAgency,
    ProgramRunByDate,
    Receiver,
    Antenna,
    ApproxPosition,
    AntennaDeltaHen,
    TypesOfObserv,
    Interval,
    TimeOfFirstObs,
    TimeOfLastObs,
    EndOfHeader,
    /// Not interpreted by this parser
    Other,
}

impl Label {
    pub(crate) fn classify(label: &str) -> Self {
        match label.trim_end() {
            "RINEX VERSION / TYPE" => Self::VersionType,
            "COMMENT" => Self::Comment,
            "MARKER NAME" => Self::MarkerName,
            "MARKER NUMBER" => Self::MarkerNumber,
            "OBSERVER / AGENCY" => Self::ObserverAgency,
            "PGM / RUN BY / DATE" => Self::ProgramRunByDate,
            "REC # / TYPE / VERS" => Self::Receiver,
            "ANT # / TYPE" => Self::Antenna,
            "APPROX POSITION XYZ" => Self::ApproxPosition,
            "ANTENNA: DELTA H/E/N" => Self::AntennaDeltaHen,
            "# / TYPES OF OBSERV" => Self::TypesOfObserv,
            "INTERVAL" => Self::Interval,
            "TIME OF FIRST OBS" => Self::TimeOfFirstObs,
            "TIME OF LAST OBS" => Self::TimeOfLastObs,
            "END OF HEADER" => Self::EndOfHeader,
            _ => Self::Other,
        }
    }
}
