use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    InvalidTriangle = "In a right triangle, the hypotenuse must be the longest side.",
    InvalidAngleRange{start: f64, end: f64} = "The angle must be between 0 and 360 degrees (got {start}, {end}).",
    Construction{what: String} = "Something went wrong while calculating {what}.",
    UnknownModule{name: String} = "Error loading instruction module. \"{name}\" not found.",
    InvalidCoordinate{text: String} = "Not an OpenAIR coordinate: \"{text}\"",
    IncompleteHeader{reason: String} = "Incomplete airspace header: {reason}"
}
