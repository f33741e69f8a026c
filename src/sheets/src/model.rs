// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The messages exchanged with the Sheets service.
//!
//! All wire messages serialize to the JSON representation the service
//! expects: field names in `camelCase`, unset fields omitted. Enum-valued
//! fields (`major_dimension`, `value_input_option`, the render options) are
//! open strings; the documented values are the ones the service accepts
//! today, unknown values are passed through verbatim.

use serde::{Deserialize, Serialize};

/// A spreadsheet: the top-level resource of the Sheets service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Spreadsheet {
    /// The ID of the spreadsheet. This field is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// Overall properties of the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SpreadsheetProperties>,

    /// The sheets that are part of the spreadsheet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sheets: Vec<Sheet>,

    /// The named ranges defined in the spreadsheet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub named_ranges: Vec<NamedRange>,

    /// The URL of the spreadsheet. This field is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_url: Option<String>,
}

impl Spreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [spreadsheet_id][Spreadsheet::spreadsheet_id].
    pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_id = Some(v.into());
        self
    }

    /// Sets the value for [properties][Spreadsheet::properties].
    pub fn set_properties<T: Into<SpreadsheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value for [sheets][Spreadsheet::sheets].
    pub fn set_sheets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Sheet>,
    {
        self.sheets = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for [named_ranges][Spreadsheet::named_ranges].
    pub fn set_named_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NamedRange>,
    {
        self.named_ranges = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for [spreadsheet_url][Spreadsheet::spreadsheet_url].
    pub fn set_spreadsheet_url<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_url = Some(v.into());
        self
    }
}

/// Properties of a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpreadsheetProperties {
    /// The title of the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The locale of the spreadsheet, e.g. `en_US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// The amount of time to wait before volatile functions are recalculated.
    /// One of `ON_CHANGE`, `MINUTE`, or `HOUR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recalc: Option<String>,

    /// The time zone of the spreadsheet, in CLDR format, e.g.
    /// `America/New_York`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl SpreadsheetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [title][SpreadsheetProperties::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value for [locale][SpreadsheetProperties::locale].
    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }

    /// Sets the value for [auto_recalc][SpreadsheetProperties::auto_recalc].
    pub fn set_auto_recalc<T: Into<String>>(mut self, v: T) -> Self {
        self.auto_recalc = Some(v.into());
        self
    }

    /// Sets the value for [time_zone][SpreadsheetProperties::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }
}

/// A sheet in a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sheet {
    /// The properties of the sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,

    /// Data in the grid, if this is a grid sheet. Only populated when the
    /// spreadsheet is requested with grid data.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<GridData>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][Sheet::properties].
    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value for [data][Sheet::data].
    pub fn set_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GridData>,
    {
        self.data = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// Properties of a sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SheetProperties {
    /// The ID of the sheet. Must be non-negative. This field cannot be
    /// changed once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,

    /// The name of the sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The index of the sheet within the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,

    /// The type of sheet. `GRID` unless this sheet contains a single
    /// embedded object, in which case it is `OBJECT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_type: Option<String>,

    /// Additional properties of the sheet if this sheet is a grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,

    /// True if the sheet is hidden in the UI, false if it's visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// True if the sheet is an RTL sheet instead of an LTR sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_to_left: Option<bool>,
}

impl SheetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [sheet_id][SheetProperties::sheet_id].
    pub fn set_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.sheet_id = Some(v.into());
        self
    }

    /// Sets the value for [title][SheetProperties::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value for [index][SheetProperties::index].
    pub fn set_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.index = Some(v.into());
        self
    }

    /// Sets the value for [sheet_type][SheetProperties::sheet_type].
    pub fn set_sheet_type<T: Into<String>>(mut self, v: T) -> Self {
        self.sheet_type = Some(v.into());
        self
    }

    /// Sets the value for [grid_properties][SheetProperties::grid_properties].
    pub fn set_grid_properties<T: Into<GridProperties>>(mut self, v: T) -> Self {
        self.grid_properties = Some(v.into());
        self
    }

    /// Sets the value for [hidden][SheetProperties::hidden].
    pub fn set_hidden<T: Into<bool>>(mut self, v: T) -> Self {
        self.hidden = Some(v.into());
        self
    }

    /// Sets the value for [right_to_left][SheetProperties::right_to_left].
    pub fn set_right_to_left<T: Into<bool>>(mut self, v: T) -> Self {
        self.right_to_left = Some(v.into());
        self
    }
}

/// Properties of a grid.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GridProperties {
    /// The number of rows in the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i32>,

    /// The number of columns in the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<i32>,

    /// The number of rows that are frozen in the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_row_count: Option<i32>,

    /// The number of columns that are frozen in the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_column_count: Option<i32>,

    /// True if the grid isn't showing gridlines in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_gridlines: Option<bool>,
}

impl GridProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [row_count][GridProperties::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }

    /// Sets the value for [column_count][GridProperties::column_count].
    pub fn set_column_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.column_count = Some(v.into());
        self
    }

    /// Sets the value for [frozen_row_count][GridProperties::frozen_row_count].
    pub fn set_frozen_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.frozen_row_count = Some(v.into());
        self
    }

    /// Sets the value for [frozen_column_count][GridProperties::frozen_column_count].
    pub fn set_frozen_column_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.frozen_column_count = Some(v.into());
        self
    }

    /// Sets the value for [hide_gridlines][GridProperties::hide_gridlines].
    pub fn set_hide_gridlines<T: Into<bool>>(mut self, v: T) -> Self {
        self.hide_gridlines = Some(v.into());
        self
    }
}

/// A named range.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamedRange {
    /// The ID of the named range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_range_id: Option<String>,

    /// The name of the named range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The range this represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<GridRange>,
}

impl NamedRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [named_range_id][NamedRange::named_range_id].
    pub fn set_named_range_id<T: Into<String>>(mut self, v: T) -> Self {
        self.named_range_id = Some(v.into());
        self
    }

    /// Sets the value for [name][NamedRange::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value for [range][NamedRange::range].
    pub fn set_range<T: Into<GridRange>>(mut self, v: T) -> Self {
        self.range = Some(v.into());
        self
    }
}

/// A range on a sheet. All indexes are zero-based. Indexes are half open:
/// the start index is inclusive and the end index is exclusive. Missing
/// indexes indicate the range is unbounded on that side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GridRange {
    /// The sheet this range is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,

    /// The start row (inclusive) of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<i32>,

    /// The end row (exclusive) of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<i32>,

    /// The start column (inclusive) of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<i32>,

    /// The end column (exclusive) of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<i32>,
}

impl GridRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [sheet_id][GridRange::sheet_id].
    pub fn set_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.sheet_id = Some(v.into());
        self
    }

    /// Sets the value for [start_row_index][GridRange::start_row_index].
    pub fn set_start_row_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_row_index = Some(v.into());
        self
    }

    /// Sets the value for [end_row_index][GridRange::end_row_index].
    pub fn set_end_row_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.end_row_index = Some(v.into());
        self
    }

    /// Sets the value for [start_column_index][GridRange::start_column_index].
    pub fn set_start_column_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_column_index = Some(v.into());
        self
    }

    /// Sets the value for [end_column_index][GridRange::end_column_index].
    pub fn set_end_column_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.end_column_index = Some(v.into());
        self
    }
}

/// Data in the grid, as well as metadata about the dimensions.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GridData {
    /// The first row this GridData refers to, zero-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row: Option<i32>,

    /// The first column this GridData refers to, zero-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<i32>,

    /// The data in the grid, one entry per row.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_data: Vec<RowData>,
}

impl GridData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [start_row][GridData::start_row].
    pub fn set_start_row<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_row = Some(v.into());
        self
    }

    /// Sets the value for [start_column][GridData::start_column].
    pub fn set_start_column<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_column = Some(v.into());
        self
    }

    /// Sets the value for [row_data][GridData::row_data].
    pub fn set_row_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<RowData>,
    {
        self.row_data = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// Data about each cell in a row.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RowData {
    /// The values in the row, one per column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CellData>,
}

impl RowData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [values][RowData::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CellData>,
    {
        self.values = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// Data about a specific cell.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CellData {
    /// The value the user entered in the cell, e.g. `1234`, `'Hello'`, or
    /// `=NOW()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,

    /// The effective value of the cell. For cells with formulas, this is the
    /// calculated value. This field is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_value: Option<ExtendedValue>,

    /// The formatted value of the cell, as shown in the UI. This field is
    /// read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

impl CellData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [user_entered_value][CellData::user_entered_value].
    pub fn set_user_entered_value<T: Into<ExtendedValue>>(mut self, v: T) -> Self {
        self.user_entered_value = Some(v.into());
        self
    }

    /// Sets the value for [effective_value][CellData::effective_value].
    pub fn set_effective_value<T: Into<ExtendedValue>>(mut self, v: T) -> Self {
        self.effective_value = Some(v.into());
        self
    }

    /// Sets the value for [formatted_value][CellData::formatted_value].
    pub fn set_formatted_value<T: Into<String>>(mut self, v: T) -> Self {
        self.formatted_value = Some(v.into());
        self
    }
}

/// The kinds of value that a cell can have. Exactly one field is set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtendedValue {
    /// Represents a double value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,

    /// Represents a string value. Leading single quotes are not included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// Represents a boolean value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,

    /// Represents a formula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_value: Option<String>,

    /// Represents an error. This field is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_value: Option<ErrorValue>,
}

impl ExtendedValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [number_value][ExtendedValue::number_value].
    pub fn set_number_value<T: Into<f64>>(mut self, v: T) -> Self {
        self.number_value = Some(v.into());
        self
    }

    /// Sets the value for [string_value][ExtendedValue::string_value].
    pub fn set_string_value<T: Into<String>>(mut self, v: T) -> Self {
        self.string_value = Some(v.into());
        self
    }

    /// Sets the value for [bool_value][ExtendedValue::bool_value].
    pub fn set_bool_value<T: Into<bool>>(mut self, v: T) -> Self {
        self.bool_value = Some(v.into());
        self
    }

    /// Sets the value for [formula_value][ExtendedValue::formula_value].
    pub fn set_formula_value<T: Into<String>>(mut self, v: T) -> Self {
        self.formula_value = Some(v.into());
        self
    }

    /// Sets the value for [error_value][ExtendedValue::error_value].
    pub fn set_error_value<T: Into<ErrorValue>>(mut self, v: T) -> Self {
        self.error_value = Some(v.into());
        self
    }
}

/// An error in a cell.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorValue {
    /// The type of error, e.g. `DIVIDE_BY_ZERO`, `REF`, or `N_A`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// A message with more information about the error, in the spreadsheet's
    /// locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `type`.
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value for [message][ErrorValue::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// Data within a range of the spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValueRange {
    /// The range the values cover, in A1 notation. For output, this range
    /// indicates the entire requested range, even though the values will
    /// exclude trailing rows and columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// The major dimension of the values: `ROWS` or `COLUMNS`.
    ///
    /// For example, if the spreadsheet data is `A1=1,B1=2,A2=3,B2=4`, then
    /// requesting `range=A1:B2,majorDimension=ROWS` will return
    /// `[[1,2],[3,4]]`, whereas requesting
    /// `range=A1:B2,majorDimension=COLUMNS` will return `[[1,3],[2,4]]`.
    ///
    /// For output, the default is `ROWS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    /// The data that was read or is to be written. The outer list represents
    /// the major dimension, each inner list the cells along the minor
    /// dimension. Cell values may be strings, numbers, or booleans; empty
    /// trailing rows and columns are omitted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [range][ValueRange::range].
    pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
        self.range = Some(v.into());
        self
    }

    /// Sets the value for [major_dimension][ValueRange::major_dimension].
    pub fn set_major_dimension<T: Into<String>>(mut self, v: T) -> Self {
        self.major_dimension = Some(v.into());
        self
    }

    /// Sets the value for [values][ValueRange::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Vec<serde_json::Value>>,
    {
        self.values = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// The response when updating a range of values in a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateValuesResponse {
    /// The spreadsheet the updates were applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// The range (in A1 notation) that updates were applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_range: Option<String>,

    /// The number of rows where at least one cell in the row was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_rows: Option<i32>,

    /// The number of columns where at least one cell in the column was
    /// updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_columns: Option<i32>,

    /// The number of cells updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_cells: Option<i32>,

    /// The values of the cells after updates were applied. Only included if
    /// the request's `includeValuesInResponse` field was `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_data: Option<ValueRange>,
}

impl UpdateValuesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [spreadsheet_id][UpdateValuesResponse::spreadsheet_id].
    pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_id = Some(v.into());
        self
    }

    /// Sets the value for [updated_range][UpdateValuesResponse::updated_range].
    pub fn set_updated_range<T: Into<String>>(mut self, v: T) -> Self {
        self.updated_range = Some(v.into());
        self
    }

    /// Sets the value for [updated_rows][UpdateValuesResponse::updated_rows].
    pub fn set_updated_rows<T: Into<i32>>(mut self, v: T) -> Self {
        self.updated_rows = Some(v.into());
        self
    }

    /// Sets the value for [updated_columns][UpdateValuesResponse::updated_columns].
    pub fn set_updated_columns<T: Into<i32>>(mut self, v: T) -> Self {
        self.updated_columns = Some(v.into());
        self
    }

    /// Sets the value for [updated_cells][UpdateValuesResponse::updated_cells].
    pub fn set_updated_cells<T: Into<i32>>(mut self, v: T) -> Self {
        self.updated_cells = Some(v.into());
        self
    }

    /// Sets the value for [updated_data][UpdateValuesResponse::updated_data].
    pub fn set_updated_data<T: Into<ValueRange>>(mut self, v: T) -> Self {
        self.updated_data = Some(v.into());
        self
    }
}

/// The response when retrieving more than one range of values in a
/// spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchGetValuesResponse {
    /// The ID of the spreadsheet the data was retrieved from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// The requested values. The order of the ValueRanges is the same as the
    /// order of the requested ranges.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_ranges: Vec<ValueRange>,
}

impl BatchGetValuesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [spreadsheet_id][BatchGetValuesResponse::spreadsheet_id].
    pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_id = Some(v.into());
        self
    }

    /// Sets the value for [value_ranges][BatchGetValuesResponse::value_ranges].
    pub fn set_value_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ValueRange>,
    {
        self.value_ranges = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// The request for updating more than one range of values in a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateValuesRequest {
    /// How the input data should be interpreted: `RAW` or `USER_ENTERED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_input_option: Option<String>,

    /// The new values to apply to the spreadsheet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ValueRange>,

    /// Determines if the update response should include the values of the
    /// cells that were updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_values_in_response: Option<bool>,

    /// Determines how values in the response should be rendered. Ignored
    /// unless `include_values_in_response` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_value_render_option: Option<String>,

    /// Determines how dates in the response should be rendered. Ignored
    /// unless `include_values_in_response` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date_time_render_option: Option<String>,
}

impl BatchUpdateValuesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [value_input_option][BatchUpdateValuesRequest::value_input_option].
    pub fn set_value_input_option<T: Into<String>>(mut self, v: T) -> Self {
        self.value_input_option = Some(v.into());
        self
    }

    /// Sets the value for [data][BatchUpdateValuesRequest::data].
    pub fn set_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ValueRange>,
    {
        self.data = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for
    /// [include_values_in_response][BatchUpdateValuesRequest::include_values_in_response].
    pub fn set_include_values_in_response<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_values_in_response = Some(v.into());
        self
    }

    /// Sets the value for
    /// [response_value_render_option][BatchUpdateValuesRequest::response_value_render_option].
    pub fn set_response_value_render_option<T: Into<String>>(mut self, v: T) -> Self {
        self.response_value_render_option = Some(v.into());
        self
    }

    /// Sets the value for
    /// [response_date_time_render_option][BatchUpdateValuesRequest::response_date_time_render_option].
    pub fn set_response_date_time_render_option<T: Into<String>>(mut self, v: T) -> Self {
        self.response_date_time_render_option = Some(v.into());
        self
    }
}

/// The response when updating more than one range of values in a
/// spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateValuesResponse {
    /// The spreadsheet the updates were applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// The total number of rows where at least one cell was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_updated_rows: Option<i32>,

    /// The total number of columns where at least one cell was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_updated_columns: Option<i32>,

    /// The total number of cells updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_updated_cells: Option<i32>,

    /// The total number of sheets where at least one cell was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_updated_sheets: Option<i32>,

    /// One UpdateValuesResponse per requested range, in the same order as
    /// the requests appeared.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<UpdateValuesResponse>,
}

impl BatchUpdateValuesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [spreadsheet_id][BatchUpdateValuesResponse::spreadsheet_id].
    pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_id = Some(v.into());
        self
    }

    /// Sets the value for [total_updated_rows][BatchUpdateValuesResponse::total_updated_rows].
    pub fn set_total_updated_rows<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_updated_rows = Some(v.into());
        self
    }

    /// Sets the value for
    /// [total_updated_columns][BatchUpdateValuesResponse::total_updated_columns].
    pub fn set_total_updated_columns<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_updated_columns = Some(v.into());
        self
    }

    /// Sets the value for [total_updated_cells][BatchUpdateValuesResponse::total_updated_cells].
    pub fn set_total_updated_cells<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_updated_cells = Some(v.into());
        self
    }

    /// Sets the value for
    /// [total_updated_sheets][BatchUpdateValuesResponse::total_updated_sheets].
    pub fn set_total_updated_sheets<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_updated_sheets = Some(v.into());
        self
    }

    /// Sets the value for [responses][BatchUpdateValuesResponse::responses].
    pub fn set_responses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UpdateValuesResponse>,
    {
        self.responses = v.into_iter().map(|x| x.into()).collect();
        self
    }
}

/// The request for updating any aspect of a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateSpreadsheetRequest {
    /// A list of updates to apply to the spreadsheet. Requests are applied
    /// in the order they are specified. If any request is not valid, no
    /// requests are applied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<Request>,

    /// Determines if the update response should include the spreadsheet
    /// resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_spreadsheet_in_response: Option<bool>,

    /// Limits the ranges included in the response spreadsheet. Meaningful
    /// only if `include_spreadsheet_in_response` is `true`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_ranges: Vec<String>,

    /// True if grid data should be returned. Meaningful only if
    /// `include_spreadsheet_in_response` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_include_grid_data: Option<bool>,
}

impl BatchUpdateSpreadsheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [requests][BatchUpdateSpreadsheetRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Request>,
    {
        self.requests = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for
    /// [include_spreadsheet_in_response][BatchUpdateSpreadsheetRequest::include_spreadsheet_in_response].
    pub fn set_include_spreadsheet_in_response<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_spreadsheet_in_response = Some(v.into());
        self
    }

    /// Sets the value for [response_ranges][BatchUpdateSpreadsheetRequest::response_ranges].
    pub fn set_response_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.response_ranges = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for
    /// [response_include_grid_data][BatchUpdateSpreadsheetRequest::response_include_grid_data].
    pub fn set_response_include_grid_data<T: Into<bool>>(mut self, v: T) -> Self {
        self.response_include_grid_data = Some(v.into());
        self
    }
}

/// A single kind of update to apply to a spreadsheet. At most one field is
/// set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Request {
    /// Adds a sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetRequest>,

    /// Deletes a sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_sheet: Option<DeleteSheetRequest>,

    /// Duplicates a sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_sheet: Option<DuplicateSheetRequest>,

    /// Updates a sheet's properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_sheet_properties: Option<UpdateSheetPropertiesRequest>,

    /// Updates the spreadsheet's properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_spreadsheet_properties: Option<UpdateSpreadsheetPropertiesRequest>,

    /// Adds a named range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_named_range: Option<AddNamedRangeRequest>,

    /// Deletes a named range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_named_range: Option<DeleteNamedRangeRequest>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [add_sheet][Request::add_sheet].
    pub fn set_add_sheet<T: Into<AddSheetRequest>>(mut self, v: T) -> Self {
        self.add_sheet = Some(v.into());
        self
    }

    /// Sets the value for [delete_sheet][Request::delete_sheet].
    pub fn set_delete_sheet<T: Into<DeleteSheetRequest>>(mut self, v: T) -> Self {
        self.delete_sheet = Some(v.into());
        self
    }

    /// Sets the value for [duplicate_sheet][Request::duplicate_sheet].
    pub fn set_duplicate_sheet<T: Into<DuplicateSheetRequest>>(mut self, v: T) -> Self {
        self.duplicate_sheet = Some(v.into());
        self
    }

    /// Sets the value for [update_sheet_properties][Request::update_sheet_properties].
    pub fn set_update_sheet_properties<T: Into<UpdateSheetPropertiesRequest>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_sheet_properties = Some(v.into());
        self
    }

    /// Sets the value for
    /// [update_spreadsheet_properties][Request::update_spreadsheet_properties].
    pub fn set_update_spreadsheet_properties<T: Into<UpdateSpreadsheetPropertiesRequest>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_spreadsheet_properties = Some(v.into());
        self
    }

    /// Sets the value for [add_named_range][Request::add_named_range].
    pub fn set_add_named_range<T: Into<AddNamedRangeRequest>>(mut self, v: T) -> Self {
        self.add_named_range = Some(v.into());
        self
    }

    /// Sets the value for [delete_named_range][Request::delete_named_range].
    pub fn set_delete_named_range<T: Into<DeleteNamedRangeRequest>>(mut self, v: T) -> Self {
        self.delete_named_range = Some(v.into());
        self
    }
}

/// A single response from an update.
///
/// Requests that have no meaningful reply produce an empty `Response`; the
/// reply list of a batch update mirrors the request list positionally.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Response {
    /// A reply from adding a sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetResponse>,

    /// A reply from duplicating a sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_sheet: Option<DuplicateSheetResponse>,

    /// A reply from adding a named range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_named_range: Option<AddNamedRangeResponse>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this response carries no reply.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Sets the value for [add_sheet][Response::add_sheet].
    pub fn set_add_sheet<T: Into<AddSheetResponse>>(mut self, v: T) -> Self {
        self.add_sheet = Some(v.into());
        self
    }

    /// Sets the value for [duplicate_sheet][Response::duplicate_sheet].
    pub fn set_duplicate_sheet<T: Into<DuplicateSheetResponse>>(mut self, v: T) -> Self {
        self.duplicate_sheet = Some(v.into());
        self
    }

    /// Sets the value for [add_named_range][Response::add_named_range].
    pub fn set_add_named_range<T: Into<AddNamedRangeResponse>>(mut self, v: T) -> Self {
        self.add_named_range = Some(v.into());
        self
    }
}

/// The reply for batch updating a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateSpreadsheetResponse {
    /// The spreadsheet the updates were applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// The reply of the updates. This maps 1:1 with the updates, although
    /// replies to some requests may be empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Response>,

    /// The spreadsheet after updates were applied. Only set if
    /// `include_spreadsheet_in_response` was `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_spreadsheet: Option<Spreadsheet>,
}

impl BatchUpdateSpreadsheetResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for
    /// [spreadsheet_id][BatchUpdateSpreadsheetResponse::spreadsheet_id].
    pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spreadsheet_id = Some(v.into());
        self
    }

    /// Sets the value for [replies][BatchUpdateSpreadsheetResponse::replies].
    pub fn set_replies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Response>,
    {
        self.replies = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the value for
    /// [updated_spreadsheet][BatchUpdateSpreadsheetResponse::updated_spreadsheet].
    pub fn set_updated_spreadsheet<T: Into<Spreadsheet>>(mut self, v: T) -> Self {
        self.updated_spreadsheet = Some(v.into());
        self
    }
}

/// Adds a new sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddSheetRequest {
    /// The properties the new sheet should have. All properties are
    /// optional. If a sheet ID is specified, it must not conflict with any
    /// existing sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
}

impl AddSheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][AddSheetRequest::properties].
    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

/// The result of adding a sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddSheetResponse {
    /// The properties of the newly added sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
}

impl AddSheetResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][AddSheetResponse::properties].
    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

/// Deletes the requested sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteSheetRequest {
    /// The ID of the sheet to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,
}

impl DeleteSheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [sheet_id][DeleteSheetRequest::sheet_id].
    pub fn set_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.sheet_id = Some(v.into());
        self
    }
}

/// Duplicates the contents of a sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DuplicateSheetRequest {
    /// The sheet to duplicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sheet_id: Option<i32>,

    /// The zero-based index where the new sheet should be inserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_sheet_index: Option<i32>,

    /// If set, the ID of the new sheet. If not set, an ID is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_sheet_id: Option<i32>,

    /// The name of the new sheet. If empty, a new name is chosen for you.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_sheet_name: Option<String>,
}

impl DuplicateSheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [source_sheet_id][DuplicateSheetRequest::source_sheet_id].
    pub fn set_source_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.source_sheet_id = Some(v.into());
        self
    }

    /// Sets the value for [insert_sheet_index][DuplicateSheetRequest::insert_sheet_index].
    pub fn set_insert_sheet_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.insert_sheet_index = Some(v.into());
        self
    }

    /// Sets the value for [new_sheet_id][DuplicateSheetRequest::new_sheet_id].
    pub fn set_new_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.new_sheet_id = Some(v.into());
        self
    }

    /// Sets the value for [new_sheet_name][DuplicateSheetRequest::new_sheet_name].
    pub fn set_new_sheet_name<T: Into<String>>(mut self, v: T) -> Self {
        self.new_sheet_name = Some(v.into());
        self
    }
}

/// The result of duplicating a sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DuplicateSheetResponse {
    /// The properties of the duplicate sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
}

impl DuplicateSheetResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][DuplicateSheetResponse::properties].
    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

/// Updates properties of the sheet with the specified sheet ID.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSheetPropertiesRequest {
    /// The properties to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,

    /// The fields that should be updated. At least one field must be
    /// specified. The root `properties` is implied and should not be
    /// specified. A single `"*"` can be used as short-hand for listing every
    /// field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl UpdateSheetPropertiesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][UpdateSheetPropertiesRequest::properties].
    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value for [fields][UpdateSheetPropertiesRequest::fields].
    pub fn set_fields<T: Into<String>>(mut self, v: T) -> Self {
        self.fields = Some(v.into());
        self
    }
}

/// Updates properties of a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSpreadsheetPropertiesRequest {
    /// The properties to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SpreadsheetProperties>,

    /// The fields that should be updated. At least one field must be
    /// specified. The root `properties` is implied and should not be
    /// specified. A single `"*"` can be used as short-hand for listing every
    /// field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl UpdateSpreadsheetPropertiesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [properties][UpdateSpreadsheetPropertiesRequest::properties].
    pub fn set_properties<T: Into<SpreadsheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value for [fields][UpdateSpreadsheetPropertiesRequest::fields].
    pub fn set_fields<T: Into<String>>(mut self, v: T) -> Self {
        self.fields = Some(v.into());
        self
    }
}

/// Adds a named range to the spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddNamedRangeRequest {
    /// The named range to add. The `named_range_id` field is optional; if
    /// one is not set, an ID is randomly generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_range: Option<NamedRange>,
}

impl AddNamedRangeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [named_range][AddNamedRangeRequest::named_range].
    pub fn set_named_range<T: Into<NamedRange>>(mut self, v: T) -> Self {
        self.named_range = Some(v.into());
        self
    }
}

/// The result of adding a named range.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddNamedRangeResponse {
    /// The named range to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_range: Option<NamedRange>,
}

impl AddNamedRangeResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [named_range][AddNamedRangeResponse::named_range].
    pub fn set_named_range<T: Into<NamedRange>>(mut self, v: T) -> Self {
        self.named_range = Some(v.into());
        self
    }
}

/// Removes the named range with the given ID from the spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteNamedRangeRequest {
    /// The ID of the named range to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_range_id: Option<String>,
}

impl DeleteNamedRangeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [named_range_id][DeleteNamedRangeRequest::named_range_id].
    pub fn set_named_range_id<T: Into<String>>(mut self, v: T) -> Self {
        self.named_range_id = Some(v.into());
        self
    }
}

/// The request to copy a sheet across spreadsheets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CopySheetToAnotherSpreadsheetRequest {
    /// The ID of the spreadsheet to copy the sheet to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_spreadsheet_id: Option<String>,
}

impl CopySheetToAnotherSpreadsheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for
    /// [destination_spreadsheet_id][CopySheetToAnotherSpreadsheetRequest::destination_spreadsheet_id].
    pub fn set_destination_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_spreadsheet_id = Some(v.into());
        self
    }
}

/// Synthetic request messages.
///
/// These messages carry the path and query parameters of RPCs that do not
/// have a body of their own, or whose body is a separate wire message. They
/// are not part of the wire protocol and are intentionally not serializable.
pub mod requests {
    /// The request message for getting a spreadsheet.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct GetSpreadsheetRequest {
        /// The spreadsheet to request.
        pub spreadsheet_id: String,

        /// The ranges to retrieve from the spreadsheet.
        pub ranges: Vec<String>,

        /// True if grid data should be returned. This parameter is ignored
        /// if a field mask was set in the request.
        pub include_grid_data: Option<bool>,
    }

    impl GetSpreadsheetRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][GetSpreadsheetRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [ranges][GetSpreadsheetRequest::ranges].
        pub fn set_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.ranges = v.into_iter().map(|x| x.into()).collect();
            self
        }

        /// Sets the value for [include_grid_data][GetSpreadsheetRequest::include_grid_data].
        pub fn set_include_grid_data<T: Into<bool>>(mut self, v: T) -> Self {
            self.include_grid_data = Some(v.into());
            self
        }
    }

    /// The request message for batch updating a spreadsheet.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct BatchUpdateSpreadsheetRequest {
        /// The spreadsheet to apply the updates to.
        pub spreadsheet_id: String,

        /// The body of the request.
        pub request: Option<super::BatchUpdateSpreadsheetRequest>,
    }

    impl BatchUpdateSpreadsheetRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][BatchUpdateSpreadsheetRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [request][BatchUpdateSpreadsheetRequest::request].
        pub fn set_request<T: Into<super::BatchUpdateSpreadsheetRequest>>(mut self, v: T) -> Self {
            self.request = Some(v.into());
            self
        }
    }

    /// The request message for reading a single range of values.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct GetValuesRequest {
        /// The ID of the spreadsheet to retrieve data from.
        pub spreadsheet_id: String,

        /// The A1 notation of the values to retrieve.
        pub range: String,

        /// The major dimension that results should use: `ROWS` or `COLUMNS`.
        pub major_dimension: Option<String>,

        /// How values should be represented in the output:
        /// `FORMATTED_VALUE`, `UNFORMATTED_VALUE`, or `FORMULA`.
        pub value_render_option: Option<String>,

        /// How dates, times, and durations should be represented in the
        /// output: `SERIAL_NUMBER` or `FORMATTED_STRING`. This is ignored if
        /// the value render option is `FORMATTED_VALUE`.
        pub date_time_render_option: Option<String>,
    }

    impl GetValuesRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][GetValuesRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [range][GetValuesRequest::range].
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.range = v.into();
            self
        }

        /// Sets the value for [major_dimension][GetValuesRequest::major_dimension].
        pub fn set_major_dimension<T: Into<String>>(mut self, v: T) -> Self {
            self.major_dimension = Some(v.into());
            self
        }

        /// Sets the value for [value_render_option][GetValuesRequest::value_render_option].
        pub fn set_value_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.value_render_option = Some(v.into());
            self
        }

        /// Sets the value for
        /// [date_time_render_option][GetValuesRequest::date_time_render_option].
        pub fn set_date_time_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.date_time_render_option = Some(v.into());
            self
        }
    }

    /// The request message for writing a single range of values.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct UpdateValuesRequest {
        /// The ID of the spreadsheet to update.
        pub spreadsheet_id: String,

        /// The A1 notation of the values to update.
        pub range: String,

        /// How the input data should be interpreted: `RAW` or
        /// `USER_ENTERED`.
        pub value_input_option: Option<String>,

        /// The body of the request.
        pub value_range: Option<super::ValueRange>,
    }

    impl UpdateValuesRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][UpdateValuesRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [range][UpdateValuesRequest::range].
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.range = v.into();
            self
        }

        /// Sets the value for [value_input_option][UpdateValuesRequest::value_input_option].
        pub fn set_value_input_option<T: Into<String>>(mut self, v: T) -> Self {
            self.value_input_option = Some(v.into());
            self
        }

        /// Sets the value for [value_range][UpdateValuesRequest::value_range].
        pub fn set_value_range<T: Into<super::ValueRange>>(mut self, v: T) -> Self {
            self.value_range = Some(v.into());
            self
        }
    }

    /// The request message for reading multiple ranges of values.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct BatchGetValuesRequest {
        /// The ID of the spreadsheet to retrieve data from.
        pub spreadsheet_id: String,

        /// The A1 notation of the values to retrieve.
        pub ranges: Vec<String>,

        /// The major dimension that results should use: `ROWS` or `COLUMNS`.
        pub major_dimension: Option<String>,

        /// How values should be represented in the output.
        pub value_render_option: Option<String>,

        /// How dates, times, and durations should be represented in the
        /// output. This is ignored if the value render option is
        /// `FORMATTED_VALUE`.
        pub date_time_render_option: Option<String>,
    }

    impl BatchGetValuesRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][BatchGetValuesRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [ranges][BatchGetValuesRequest::ranges].
        pub fn set_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.ranges = v.into_iter().map(|x| x.into()).collect();
            self
        }

        /// Sets the value for [major_dimension][BatchGetValuesRequest::major_dimension].
        pub fn set_major_dimension<T: Into<String>>(mut self, v: T) -> Self {
            self.major_dimension = Some(v.into());
            self
        }

        /// Sets the value for [value_render_option][BatchGetValuesRequest::value_render_option].
        pub fn set_value_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.value_render_option = Some(v.into());
            self
        }

        /// Sets the value for
        /// [date_time_render_option][BatchGetValuesRequest::date_time_render_option].
        pub fn set_date_time_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.date_time_render_option = Some(v.into());
            self
        }
    }

    /// The request message for writing multiple ranges of values.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct BatchUpdateValuesRequest {
        /// The ID of the spreadsheet to update.
        pub spreadsheet_id: String,

        /// The body of the request.
        pub request: Option<super::BatchUpdateValuesRequest>,
    }

    impl BatchUpdateValuesRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][BatchUpdateValuesRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [request][BatchUpdateValuesRequest::request].
        pub fn set_request<T: Into<super::BatchUpdateValuesRequest>>(mut self, v: T) -> Self {
            self.request = Some(v.into());
            self
        }
    }

    /// The request message for copying a sheet to another spreadsheet.
    #[derive(Clone, Debug, Default)]
    #[non_exhaustive]
    pub struct CopySheetRequest {
        /// The ID of the spreadsheet containing the sheet to copy.
        pub spreadsheet_id: String,

        /// The ID of the sheet to copy.
        pub sheet_id: Option<i32>,

        /// The body of the request.
        pub request: Option<super::CopySheetToAnotherSpreadsheetRequest>,
    }

    impl CopySheetRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value for [spreadsheet_id][CopySheetRequest::spreadsheet_id].
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.spreadsheet_id = v.into();
            self
        }

        /// Sets the value for [sheet_id][CopySheetRequest::sheet_id].
        pub fn set_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
            self.sheet_id = Some(v.into());
            self
        }

        /// Sets the value for [request][CopySheetRequest::request].
        pub fn set_request<T: Into<super::CopySheetToAnotherSpreadsheetRequest>>(
            mut self,
            v: T,
        ) -> Self {
            self.request = Some(v.into());
            self
        }
    }
}
