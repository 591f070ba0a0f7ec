/*!
# `ENDLOOP`

## Purpose
Ends the statements repeated by the nearest open `LOOP`.

## Remarks
An `ENDLOOP` with no open `LOOP` is reported and does nothing.
Anything after `ENDLOOP` on the same line is ignored.

## Example
```text
LOOP 10
  KEYPRESS SPACE 100
  PAUSE 0.2
ENDLOOP
```

*/
