/*!
# `KEYPRESS <key> <milliseconds>[-<milliseconds>]`

## Purpose
Press a key for a chosen time.

## Remarks
Behaves exactly like `KEYDOWN`, including the rule that durations
are plain numbers with no unit suffix.

## Example
```text
KEYPRESS E 60-90
```

*/
