/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::format::FormatCode;
use crate::frame::{Dimensions, Frame, Header};

impl Serialize for FormatCode {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // format serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for Dimensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dimensions", 2)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.end()
    }
}

impl Serialize for Header {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let dims = self.dimensions();

        let mut state = serializer.serialize_struct("Header", 5)?;
        state.serialize_field("format", &self.format())?;
        state.serialize_field("format_code", &self.format().code())?;
        state.serialize_field("width", &dims.width())?;
        state.serialize_field("height", &dims.height())?;
        state.serialize_field("pixels", &dims.pixel_count())?;
        state.end()
    }
}

impl Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Frame", 2)?;
        state.serialize_field("header", self.header())?;
        state.serialize_field("tokens", &self.token_count())?;
        state.end()
    }
}
